//! # opparse REPL
use std::fs;
use std::path::PathBuf;

use rustyline::error::ReadlineError;

use crate::config::CONFIG;
use crate::exe::Executor;
use crate::format::Format;
use crate::result::{ExeErr, ExeErrKind, ExeResult};

/// Run the REPL until the user exits.
pub fn run(history_path: Option<PathBuf>) -> ExeResult {
    let executor = Executor::from_config()?;
    let mut repl = Repl::new(history_path, executor)?;
    repl.run()
}

pub struct Repl {
    reader: rustyline::Editor<()>,
    history_path: Option<PathBuf>,
    executor: Executor,
}

impl Repl {
    pub fn new(history_path: Option<PathBuf>, executor: Executor) -> Result<Self, ExeErr> {
        let reader = rustyline::Editor::<()>::new().map_err(|err| {
            ExeErr::new(ExeErrKind::ReplErr(format!("Could not initialize readline: {err}")))
        })?;
        Ok(Repl { reader, history_path, executor })
    }

    pub fn run(&mut self) -> ExeResult {
        println!("Welcome to the opparse REPL (read/parse/print loop)");
        println!("Type an expression, then hit Enter to parse it");
        self.load_history();
        println!("Type .help for commands or .exit to exit");

        loop {
            match self.read_line("→ ") {
                Ok(None) => {
                    // Blank or all-whitespace line.
                }
                Ok(Some(input)) => {
                    if let Some(result) = self.eval(input.as_str()) {
                        break result;
                    }
                }
                // User hit Ctrl-C
                Err(ReadlineError::Interrupted) => {
                    println!("Use Ctrl-D or .exit to exit");
                }
                // User hit Ctrl-D
                Err(ReadlineError::Eof) => {
                    break Ok(0);
                }
                // Unexpected error encountered while attempting to read
                // a line.
                Err(err) => {
                    let msg = format!("Could not read line: {err}");
                    break Err(ExeErr::new(ExeErrKind::ReplErr(msg)));
                }
            }
        }
    }

    /// Get a line of input from the user. Blank lines are returned as
    /// `None`.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ReadlineError> {
        match self.reader.readline(prompt) {
            Ok(input) if input.trim().is_empty() => Ok(None),
            Ok(input) => Ok(Some(input)),
            Err(err) => Err(err),
        }
    }

    /// Evaluate a line of input. Returns `None` to indicate to the main
    /// loop to continue reading input. Returns an `ExeResult` to
    /// indicate to the main loop to exit.
    pub fn eval(&mut self, text: &str) -> Option<ExeResult> {
        self.add_history_entry(text);

        let text = text.trim();

        if matches!(text, ".exit" | ".quit") {
            return Some(Ok(0));
        } else if self.handle_command(text) {
            return None;
        }

        match self.executor.execute_text(text) {
            Ok(rendered) => println!("{rendered}"),
            Err(err) => eprintln!("{err}"),
        }

        None
    }

    /// Handle REPL commands (lines starting with a dot). Returns true
    /// if the text was a command.
    fn handle_command(&mut self, text: &str) -> bool {
        let Some(command) = text.strip_prefix('.') else {
            return false;
        };
        let mut parts = command.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("help"), None) => {
                eprintln!(".help            Show this help");
                eprintln!(".exit | .quit    Exit the REPL");
                eprintln!(".format          Show the current output format");
                eprintln!(".format <name>   Set output format (tuple, infix, debug)");
            }
            (Some("format"), None) => {
                eprintln!("{:?}", self.executor.format());
            }
            (Some("format"), Some(name)) => self.set_format(name),
            _ => eprintln!("Unknown command: {text}"),
        }
        true
    }

    fn set_format(&mut self, name: &str) {
        let format = match Format::from_name(name) {
            Ok(format) => format,
            Err(msg) => return eprintln!("{msg}"),
        };
        self.executor.set_format(format);
        match CONFIG.write() {
            Ok(mut config) => {
                if let Err(err) = config.set_str("format", name) {
                    eprintln!("Could not update config: {err}");
                }
            }
            Err(err) => eprintln!("Could not update config: {err}"),
        }
    }

    fn load_history(&mut self) {
        if let Some(path) = &self.history_path {
            println!("REPL history will be saved to {}", path.to_string_lossy());
            if let Some(dir) = path.parent() {
                if let Err(err) = fs::create_dir_all(dir) {
                    eprintln!("Could not create REPL history directory: {err}");
                }
            }
            if let Err(err) = self.reader.load_history(path) {
                log::debug!("Could not load REPL history: {err}");
            }
        }
    }

    fn add_history_entry(&mut self, input: &str) {
        if let Some(path) = &self.history_path {
            self.reader.add_history_entry(input);
            if let Err(err) = self.reader.save_history(path) {
                eprintln!("Could not save REPL history: {err}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eval_empty() {
        eval("");
    }

    #[test]
    fn eval_expression() {
        eval("a * b + 2");
    }

    #[test]
    fn eval_invalid_expression() {
        eval("3 +");
    }

    #[test]
    fn eval_format_command() {
        let mut repl = new();
        assert!(repl.eval(".format infix").is_none());
        assert_eq!(repl.executor.format(), Format::Infix);
        assert!(repl.eval(".format nope").is_none());
        assert_eq!(repl.executor.format(), Format::Infix);
    }

    #[test]
    fn eval_exit() {
        let mut repl = new();
        assert!(matches!(repl.eval(".exit"), Some(Ok(0))));
        assert!(matches!(repl.eval(".quit"), Some(Ok(0))));
    }

    // Utilities -----------------------------------------------------------

    fn new() -> Repl {
        Repl::new(None, Executor::new(Format::Tuple)).unwrap()
    }

    fn eval(input: &str) {
        let mut repl = new();
        match repl.eval(input) {
            Some(Ok(_)) => panic!("eval should not exit on {input:?}"),
            Some(Err(err)) => panic!("eval failed on {input:?}: {err}"),
            None => (), // eval returns None on valid input
        }
    }
}
