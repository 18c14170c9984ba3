use std::fmt;
use std::mem;

use crate::format::{to_debug, to_tuple};
use crate::util::{BinaryOperator, Stack};

use super::{walk, LeafVisitor, Step};

/// Expression tree produced by the parser.
///
/// A chain of `n` equal-precedence operators is a tree of depth
/// `n + 1`, so `Clone`, `PartialEq`, `Debug` and `Drop` are written
/// to work iteratively rather than derived.
pub enum Expr {
    /// An integer literal or a variable name, kept as scanned.
    Leaf(String),
    /// An operator applied to two sub-expressions: (left, op, right).
    BinaryOp(Box<Expr>, BinaryOperator, Box<Expr>),
}

impl Expr {
    pub fn leaf(literal: &str) -> Self {
        Self::Leaf(literal.to_owned())
    }

    pub fn binary_op(lhs: Expr, op: BinaryOperator, rhs: Expr) -> Self {
        Self::BinaryOp(Box::new(lhs), op, Box::new(rhs))
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Number of levels in the tree. A leaf has depth 1.
    pub fn depth(&self) -> usize {
        let mut open = 0usize;
        let mut depth = 0usize;
        walk(self, |step| match step {
            Step::Open => open += 1,
            Step::Close => open -= 1,
            Step::Leaf(_) => depth = depth.max(open + 1),
            Step::Op(_) => (),
        });
        depth
    }

    /// Literals of all leaves, left to right.
    pub fn leaves(&self) -> Vec<&str> {
        let mut visitor = LeafVisitor::new();
        visitor.visit_expr(self);
        visitor.into_leaves()
    }

    /// Operators in the tree, left to right.
    pub fn operators(&self) -> Vec<BinaryOperator> {
        let mut ops = vec![];
        walk(self, |step| {
            if let Step::Op(op) = step {
                ops.push(op);
            }
        });
        ops
    }
}

/// Swap the child out for an empty leaf, which owns no allocation.
fn take(child: &mut Box<Expr>) -> Expr {
    mem::replace(&mut **child, Expr::Leaf(String::new()))
}

/// Move any non-leaf children of `expr` onto `pending`, leaving empty
/// leaves in their place.
fn detach_children(expr: &mut Expr, pending: &mut Vec<Expr>) {
    if let Expr::BinaryOp(lhs, _, rhs) = expr {
        for child in [lhs, rhs] {
            if !child.is_leaf() {
                pending.push(take(child));
            }
        }
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = vec![];
        detach_children(self, &mut pending);
        while let Some(mut node) = pending.pop() {
            detach_children(&mut node, &mut pending);
        }
    }
}

impl Clone for Expr {
    fn clone(&self) -> Self {
        // Rebuild bottom up: leaves are shifted, each close reduces.
        let mut args: Stack<Expr> = Stack::new();
        let mut ops: Stack<BinaryOperator> = Stack::new();
        walk(self, |step| match step {
            Step::Open => (),
            Step::Leaf(literal) => args.push(Expr::leaf(literal)),
            Step::Op(op) => ops.push(op),
            Step::Close => {
                if let (Some(op), Some((lhs, rhs))) = (ops.pop(), args.pop_pair()) {
                    args.push(Expr::binary_op(lhs, op, rhs));
                }
            }
        });
        match args.into_single() {
            Some(expr) => expr,
            None => unreachable!("walk always yields a balanced tree"),
        }
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some(pair) = pending.pop() {
            match pair {
                (Expr::Leaf(a), Expr::Leaf(b)) => {
                    if a != b {
                        return false;
                    }
                }
                (Expr::BinaryOp(a_lhs, a_op, a_rhs), Expr::BinaryOp(b_lhs, b_op, b_rhs)) => {
                    if a_op != b_op {
                        return false;
                    }
                    pending.push((&**a_rhs, &**b_rhs));
                    pending.push((&**a_lhs, &**b_lhs));
                }
                _ => return false,
            }
        }
        true
    }
}

impl Eq for Expr {}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_debug(self))
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_tuple(self))
    }
}
