pub use parser::{parse, Parser, ParserState};
pub use result::{ParseErr, ParseErrKind, ParseResult};

mod parser;
pub mod precedence;
mod result;
