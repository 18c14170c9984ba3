use crate::scanner::{classify, is_valid_argument, is_valid_operator, tokenize, TokenKind};

#[test]
fn tokenize_empty() {
    assert!(tokenize("").is_empty());
}

#[test]
fn tokenize_whitespace() {
    assert!(tokenize("  \t\n  ").is_empty());
}

#[test]
fn tokenize_expression() {
    assert_eq!(tokenize("3 * 2 + 6"), vec!["3", "*", "2", "+", "6"]);
}

#[test]
fn tokenize_collapses_runs_of_whitespace() {
    assert_eq!(tokenize("  foo\t*\n\nbar   "), vec!["foo", "*", "bar"]);
}

#[test]
fn tokenize_does_not_validate() {
    assert_eq!(tokenize("3+ ? x1"), vec!["3+", "?", "x1"]);
}

#[test]
fn valid_operators() {
    for op in ["*", "/", "+", "-"] {
        assert!(is_valid_operator(op), "{op} should be an operator");
    }
}

#[test]
fn invalid_operators() {
    for token in ["", "**", "//", "^", "%", "x", "1", "+-"] {
        assert!(!is_valid_operator(token), "{token:?} should not be an operator");
    }
}

#[test]
fn valid_arguments() {
    for token in ["0", "3", "42", "007", "x", "foo", "FooBar"] {
        assert!(is_valid_argument(token), "{token:?} should be an argument");
    }
}

#[test]
fn invalid_arguments() {
    for token in ["", "x1", "1x", "foo_bar", "-3", "3.0", "?", "+", "é", "٣"] {
        assert!(!is_valid_argument(token), "{token:?} should not be an argument");
    }
}

#[test]
fn classify_tokens() {
    assert_eq!(classify("*"), TokenKind::Operator);
    assert_eq!(classify("12"), TokenKind::Argument);
    assert_eq!(classify("zoo"), TokenKind::Argument);
    assert_eq!(classify("?"), TokenKind::Invalid);
    assert_eq!(classify(""), TokenKind::Invalid);
}
