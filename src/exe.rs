//! Front end for parsing expressions from a source and printing the
//! resulting trees.
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use crate::ast::Expr;
use crate::config::{ConfigErr, CONFIG};
use crate::format::Format;
use crate::parser::parse;
use crate::result::{ExeErr, ExeErrKind, ExeResult};

pub struct Executor {
    format: Format,
}

impl Executor {
    pub fn new(format: Format) -> Self {
        Self { format }
    }

    /// Create an executor using the output format from the global
    /// config.
    pub fn from_config() -> Result<Self, ExeErr> {
        let config_err = |err: ConfigErr| ExeErr::new(ExeErrKind::ConfigErr(err));
        let config = CONFIG
            .read()
            .map_err(|err| config_err(ConfigErr::new("format", &err.to_string())))?;
        let name = config.get_str("format").map_err(config_err)?;
        let format =
            Format::from_name(name).map_err(|msg| config_err(ConfigErr::new("format", &msg)))?;
        Ok(Self::new(format))
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn set_format(&mut self, format: Format) {
        self.format = format;
    }

    /// Parse text as a single expression.
    pub fn parse_text(&self, text: &str) -> Result<Expr, ExeErr> {
        parse(text).map_err(|err| ExeErr::new(ExeErrKind::ParseErr(err.kind)))
    }

    /// Parse text as a single expression and render the tree.
    pub fn execute_text(&self, text: &str) -> Result<String, ExeErr> {
        let expr = self.parse_text(text)?;
        Ok(self.format.render(&expr))
    }

    /// Parse each line of the file as an expression.
    pub fn execute_file<W: Write>(&self, file_path: &str, out: &mut W) -> ExeResult {
        match File::open(file_path) {
            Ok(file) => self.execute_lines(BufReader::new(file), out),
            Err(err) => Err(ExeErr::new(ExeErrKind::CouldNotReadSourceFile(format!(
                "{file_path}: {err}"
            )))),
        }
    }

    /// Parse each line of stdin as an expression.
    pub fn execute_stdin<W: Write>(&self, out: &mut W) -> ExeResult {
        let stdin = io::stdin();
        self.execute_lines(stdin.lock(), out)
    }

    /// Parse each non-blank line from the reader and write one result
    /// per line. A line that fails to parse is reported and skipped.
    /// The returned exit code is 0 if every line parsed and 1
    /// otherwise.
    pub fn execute_lines<R: BufRead, W: Write>(&self, reader: R, out: &mut W) -> ExeResult {
        let mut failures = 0usize;
        for (line_no, line) in reader.lines().enumerate() {
            let line = line.map_err(|err| {
                ExeErr::new(ExeErrKind::CouldNotReadSourceFile(err.to_string()))
            })?;
            if line.trim().is_empty() {
                continue;
            }
            let output = match self.execute_text(&line) {
                Ok(rendered) => rendered,
                Err(err) => {
                    failures += 1;
                    log::debug!("line {}: {err}", line_no + 1);
                    format!("{err}")
                }
            };
            writeln!(out, "{output}")
                .map_err(|err| ExeErr::new(ExeErrKind::CouldNotWriteOutput(err.to_string())))?;
        }
        Ok(if failures == 0 { 0 } else { 1 })
    }
}
