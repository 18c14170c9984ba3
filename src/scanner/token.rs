use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::parser::precedence::get_precedence;

/// An argument is either an integer literal (all digits) or a variable
/// name (all letters). Mixing the two isn't allowed.
static ARGUMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\A(?:[0-9]+|[A-Za-z]+)\z").expect("argument pattern is valid")
});

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TokenKind {
    Operator,
    Argument,
    Invalid,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = match self {
            Self::Operator => "operator",
            Self::Argument => "argument",
            Self::Invalid => "invalid",
        };
        write!(f, "{string}")
    }
}

/// Return true if the token is one of the operators in the precedence
/// table.
pub fn is_valid_operator(token: &str) -> bool {
    get_precedence(token).is_some()
}

/// Return true if the token is a non-empty run of decimal digits or a
/// non-empty run of ASCII letters.
pub fn is_valid_argument(token: &str) -> bool {
    !token.is_empty() && ARGUMENT.is_match(token)
}

pub fn classify(token: &str) -> TokenKind {
    if is_valid_operator(token) {
        TokenKind::Operator
    } else if is_valid_argument(token) {
        TokenKind::Argument
    } else {
        TokenKind::Invalid
    }
}
