pub use ast::Expr;
pub use visitors::{walk, LeafVisitor, Step};

mod ast;
mod visitors;
