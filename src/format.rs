//! Render expression trees as text.
use std::fmt::Write;

use crate::ast::{walk, Expr, Step};
use crate::util::BinaryOperator;

/// How each step of a walk is written out.
struct Style {
    open: &'static str,
    close: &'static str,
    leaf: fn(&mut String, &str),
    op: fn(&mut String, BinaryOperator),
}

const INFIX: Style = Style { open: "(", close: ")", leaf: push_plain, op: push_spaced };
const SOURCE: Style = Style { open: "", close: "", leaf: push_plain, op: push_spaced };
const TUPLE: Style = Style { open: "(", close: ")", leaf: push_quoted, op: push_quoted_op };
const DEBUG: Style = Style { open: "BinaryOp(", close: ")", leaf: push_debug, op: push_debug_op };

fn push_plain(out: &mut String, literal: &str) {
    out.push_str(literal);
}

fn push_quoted(out: &mut String, literal: &str) {
    out.push('"');
    out.push_str(literal);
    out.push('"');
}

fn push_debug(out: &mut String, literal: &str) {
    let _ = write!(out, "Leaf({literal:?})");
}

fn push_spaced(out: &mut String, op: BinaryOperator) {
    let _ = write!(out, " {op} ");
}

fn push_quoted_op(out: &mut String, op: BinaryOperator) {
    let _ = write!(out, ", \"{op}\", ");
}

fn push_debug_op(out: &mut String, op: BinaryOperator) {
    let _ = write!(out, ", {op}, ");
}

fn render(expr: &Expr, style: &Style) -> String {
    let mut out = String::new();
    walk(expr, |step| match step {
        Step::Open => out.push_str(style.open),
        Step::Leaf(literal) => (style.leaf)(&mut out, literal),
        Step::Op(op) => (style.op)(&mut out, op),
        Step::Close => out.push_str(style.close),
    });
    out
}

/// Fully parenthesized infix, e.g. `((3 * 2) + 6)`. Leaves are never
/// parenthesized.
pub fn to_infix(expr: &Expr) -> String {
    render(expr, &INFIX)
}

/// Flat token sequence separated by single spaces, e.g. `3 * 2 + 6`.
///
/// Grouping is dropped, so reparsing the output rebuilds the tree only
/// when the tree's shape follows operator precedence and left
/// associativity. Every tree produced by the parser does.
pub fn to_source(expr: &Expr) -> String {
    render(expr, &SOURCE)
}

/// Nested tuple notation, e.g. `(("3", "*", "2"), "+", "6")`. A tree
/// that's a single leaf renders as a quoted string.
pub fn to_tuple(expr: &Expr) -> String {
    render(expr, &TUPLE)
}

/// Same shape as a derived `Debug`, e.g.
/// `BinaryOp(Leaf("3"), +, Leaf("2"))`.
pub fn to_debug(expr: &Expr) -> String {
    render(expr, &DEBUG)
}

/// Output formats understood by the command line interface.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Format {
    Tuple,
    Infix,
    Debug,
}

impl Format {
    pub fn from_name(name: &str) -> Result<Self, String> {
        let format = match name {
            "tuple" => Self::Tuple,
            "infix" => Self::Infix,
            "debug" => Self::Debug,
            _ => return Err(format!("Unknown format: {name}")),
        };
        Ok(format)
    }

    pub fn render(&self, expr: &Expr) -> String {
        match self {
            Self::Tuple => to_tuple(expr),
            Self::Infix => to_infix(expr),
            Self::Debug => to_debug(expr),
        }
    }
}
