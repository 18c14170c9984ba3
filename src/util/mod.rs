pub use operators::BinaryOperator;
pub use stack::Stack;

mod operators;
mod stack;
