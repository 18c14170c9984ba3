use std::fmt;

use crate::ast;

pub type ParseResult = Result<ast::Expr, ParseErr>;

#[derive(Clone, Debug, PartialEq)]
pub struct ParseErr {
    pub kind: ParseErrKind,
}

impl ParseErr {
    pub fn new(kind: ParseErrKind) -> Self {
        Self { kind }
    }

    /// Return true if this error indicates a broken machine invariant
    /// rather than bad input.
    pub fn is_internal(&self) -> bool {
        matches!(self.kind, ParseErrKind::StackUnderflow)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ParseErrKind {
    /// Empty input, a bad token, a dangling operator, or adjacent
    /// arguments. These aren't distinguished.
    InvalidExpression,
    /// A reduction found too few items on a stack.
    StackUnderflow,
}

impl fmt::Display for ParseErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl fmt::Display for ParseErrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ParseErrKind::*;
        let msg = match self {
            InvalidExpression => "Invalid expression",
            StackUnderflow => "Internal error: parser stack underflow",
        };
        write!(f, "{msg}")
    }
}
