//! # opparse
//!
//! Operator precedence parser for infix arithmetic expressions.
//!
//! Arguments are integers or variable names and the operators are
//! `*`, `/`, `+`, and `-`. Tokens are separated by whitespace. `*` and
//! `/` bind more tightly than `+` and `-`, and operators of equal
//! precedence associate to the left.
//!
//! ```
//! use opparse::ast::Expr;
//! use opparse::util::BinaryOperator::{Add, Mul};
//!
//! let expr = opparse::parse("3 * 2 + 6").unwrap();
//! assert_eq!(
//!     expr,
//!     Expr::binary_op(
//!         Expr::binary_op(Expr::leaf("3"), Mul, Expr::leaf("2")),
//!         Add,
//!         Expr::leaf("6"),
//!     )
//! );
//! assert!(opparse::parse("3 +").is_err());
//! ```
pub use parser::{parse, ParseErr, ParseErrKind, ParseResult};

pub mod ast;
pub mod cli;
pub mod config;
pub mod exe;
pub mod format;
pub mod parser;
pub mod repl;
pub mod result;
pub mod scanner;
pub mod util;

#[cfg(test)]
mod tests;
