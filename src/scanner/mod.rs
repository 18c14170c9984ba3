pub use scanner::tokenize;
pub use token::{classify, is_valid_argument, is_valid_operator, TokenKind};

mod scanner;
mod token;
