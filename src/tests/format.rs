use crate::ast::Expr;
use crate::format::{to_infix, to_source, to_tuple, Format};
use crate::parser::parse;

fn parsed(text: &str) -> Expr {
    parse(text).unwrap()
}

#[test]
fn tuple_leaf() {
    assert_eq!(to_tuple(&parsed("3")), "\"3\"");
}

#[test]
fn tuple_nested() {
    assert_eq!(
        to_tuple(&parsed("3 * 2 + 6 / 4")),
        r#"(("3", "*", "2"), "+", ("6", "/", "4"))"#
    );
}

#[test]
fn infix_leaf_has_no_parens() {
    assert_eq!(to_infix(&parsed("x")), "x");
}

#[test]
fn infix_is_fully_parenthesized() {
    assert_eq!(to_infix(&parsed("a - b - c * d")), "((a - b) - (c * d))");
}

#[test]
fn source_is_flat() {
    assert_eq!(to_source(&parsed("  a -  b\t- c * d ")), "a - b - c * d");
}

#[test]
fn display_uses_tuple_notation() {
    assert_eq!(parsed("3 + 2").to_string(), r#"("3", "+", "2")"#);
}

#[test]
fn format_from_name() {
    assert_eq!(Format::from_name("tuple"), Ok(Format::Tuple));
    assert_eq!(Format::from_name("infix"), Ok(Format::Infix));
    assert_eq!(Format::from_name("debug"), Ok(Format::Debug));
    assert!(Format::from_name("json").is_err());
}

#[test]
fn format_render() {
    let expr = parsed("3 + 2");
    assert_eq!(Format::Tuple.render(&expr), r#"("3", "+", "2")"#);
    assert_eq!(Format::Infix.render(&expr), "(3 + 2)");
    assert_eq!(Format::Debug.render(&expr), r#"BinaryOp(Leaf("3"), +, Leaf("2"))"#);
}
