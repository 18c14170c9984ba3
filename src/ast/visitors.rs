//! AST visitors.
//!
//! Trees built from long chains of operators are as deep as the chain
//! is long, so nothing here recurses. Work is kept on a heap stack
//! instead.

use crate::util::BinaryOperator;

use super::ast::Expr;

/// One event of an in-order walk over an expression.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Step<'a> {
    /// Entering a binary operation, before its left operand.
    Open,
    Leaf(&'a str),
    /// Between the left and right operands of a binary operation.
    Op(BinaryOperator),
    /// Leaving a binary operation, after its right operand.
    Close,
}

enum Pending<'a> {
    Expr(&'a Expr),
    Op(BinaryOperator),
    Close,
}

/// Walk the expression in source order, calling `visit` for each step.
pub fn walk<'a>(expr: &'a Expr, mut visit: impl FnMut(Step<'a>)) {
    let mut pending = vec![Pending::Expr(expr)];
    while let Some(item) = pending.pop() {
        match item {
            Pending::Expr(Expr::Leaf(literal)) => visit(Step::Leaf(literal)),
            Pending::Expr(Expr::BinaryOp(lhs, op, rhs)) => {
                visit(Step::Open);
                pending.push(Pending::Close);
                pending.push(Pending::Expr(rhs));
                pending.push(Pending::Op(*op));
                pending.push(Pending::Expr(lhs));
            }
            Pending::Op(op) => visit(Step::Op(op)),
            Pending::Close => visit(Step::Close),
        }
    }
}

/// Collect the literals of an expression's leaves in source order.
pub struct LeafVisitor<'a> {
    leaves: Vec<&'a str>,
}

impl Default for LeafVisitor<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> LeafVisitor<'a> {
    pub fn new() -> Self {
        Self { leaves: vec![] }
    }

    pub fn into_leaves(self) -> Vec<&'a str> {
        self.leaves
    }

    pub fn visit_expr(&mut self, node: &'a Expr) {
        walk(node, |step| {
            if let Step::Leaf(literal) = step {
                self.leaves.push(literal);
            }
        });
    }
}
