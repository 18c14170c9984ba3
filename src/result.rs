use core::fmt;
use std::fmt::Formatter;

use crate::config::ConfigErr;
use crate::parser::ParseErrKind;

/// Result type used by the top level executor. `Ok` holds the process
/// exit code.
pub type ExeResult = Result<u8, ExeErr>;

#[derive(Debug)]
pub struct ExeErr {
    pub kind: ExeErrKind,
}

impl ExeErr {
    pub fn new(kind: ExeErrKind) -> Self {
        Self { kind }
    }

    /// Exit code to report for this error. Bad expressions exit with 1
    /// and everything else (I/O, configuration) with 2.
    pub fn exit_code(&self) -> u8 {
        match self.kind {
            ExeErrKind::ParseErr(_) => 1,
            _ => 2,
        }
    }
}

#[derive(Debug)]
pub enum ExeErrKind {
    CouldNotReadSourceFile(String),
    CouldNotWriteOutput(String),
    ConfigErr(ConfigErr),
    ParseErr(ParseErrKind),
    ReplErr(String),
}

impl fmt::Display for ExeErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl fmt::Display for ExeErrKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        use ExeErrKind::*;
        let msg = match self {
            CouldNotReadSourceFile(file_name) => {
                format!("Could not read source file: {file_name}")
            }
            CouldNotWriteOutput(msg) => format!("Could not write output: {msg}"),
            ConfigErr(err) => format!("Configuration error: {err}"),
            ParseErr(kind) => format!("Parse error: {kind}"),
            ReplErr(msg) => format!("REPL error: {msg}"),
        };
        write!(f, "{msg}")
    }
}
