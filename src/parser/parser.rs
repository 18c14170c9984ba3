use crate::ast;
use crate::scanner::{is_valid_argument, is_valid_operator, tokenize};
use crate::util::{BinaryOperator, Stack};

use super::precedence::takes_precedence;
use super::{ParseErr, ParseErrKind, ParseResult};

/// Scan the text into tokens, run the parsing machine over them, and
/// return the resulting expression tree or error.
pub fn parse(text: &str) -> ParseResult {
    let mut parser = Parser::from_text(text);
    parser.run();
    parser.into_result()
}

/// Phase of the parsing machine.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParserState {
    /// The next token must be an argument.
    ExpectArg,
    /// The machine either terminates, reduces, or shifts an operator.
    ExpectOp,
    /// Terminal. Whether the parse succeeded depends on how the machine
    /// got here.
    Done,
}

/// Shift-reduce machine for infix expressions made of arguments and
/// binary operators.
///
/// A parser is good for one parse. Create it with [`Parser::new`] or
/// [`Parser::from_text`], drive it with [`Parser::run`] (or one
/// [`Parser::step`] at a time), then take the tree with
/// [`Parser::into_result`].
pub struct Parser {
    tokens: Vec<String>,
    index: usize,
    ops: Stack<BinaryOperator>,
    args: Stack<ast::Expr>,
    state: ParserState,
    /// Set when the machine reaches `Done` via the termination check.
    terminated: bool,
    /// Set when the machine reaches `Done` because of a broken
    /// invariant.
    err: Option<ParseErrKind>,
}

impl Parser {
    pub fn new(tokens: Vec<String>) -> Self {
        let capacity = tokens.len() / 2 + 1;
        Self {
            tokens,
            index: 0,
            ops: Stack::with_capacity(capacity),
            args: Stack::with_capacity(capacity),
            state: ParserState::ExpectArg,
            terminated: false,
            err: None,
        }
    }

    pub fn from_text(text: &str) -> Self {
        Self::new(tokenize(text))
    }

    pub fn state(&self) -> ParserState {
        self.state
    }

    /// Index of the next unread token.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn op_stack(&self) -> &Stack<BinaryOperator> {
        &self.ops
    }

    pub fn arg_stack(&self) -> &Stack<ast::Expr> {
        &self.args
    }

    /// Drive the machine until it reaches `Done`. Returns the number of
    /// transitions taken.
    pub fn run(&mut self) -> usize {
        log::trace!("BEGIN: parse {:?}", self.tokens);
        let mut transitions = 0;
        while self.state != ParserState::Done {
            self.step();
            transitions += 1;
        }
        log::trace!("END: parse after {transitions} transitions");
        transitions
    }

    /// Perform one transition from the current state. Does nothing once
    /// the machine is `Done`.
    pub fn step(&mut self) {
        log::trace!(
            "{:?} @ {}: ops = {}, args = {}",
            self.state,
            self.index,
            self.ops,
            self.args.size()
        );
        match self.state {
            ParserState::ExpectArg => self.shift_arg(),
            ParserState::ExpectOp => {
                if self.terminated() {
                    self.terminated = true;
                    self.state = ParserState::Done;
                } else if self.reducible() {
                    self.reduce();
                } else {
                    self.shift_op();
                }
            }
            ParserState::Done => (),
        }
    }

    /// Consume the parser and return the parsed expression. Succeeds
    /// only if the machine terminated normally with exactly one
    /// argument left.
    pub fn into_result(self) -> ParseResult {
        if let Some(kind) = self.err {
            return Err(ParseErr::new(kind));
        }
        if self.state != ParserState::Done || !self.terminated {
            return Err(ParseErr::new(ParseErrKind::InvalidExpression));
        }
        match self.args.into_single() {
            Some(expr) => {
                log::debug!("PARSED: {expr}");
                Ok(expr)
            }
            None => Err(ParseErr::new(ParseErrKind::InvalidExpression)),
        }
    }

    // Machine -----------------------------------------------------------

    fn next_token(&self) -> Option<&str> {
        self.tokens.get(self.index).map(String::as_str)
    }

    /// No operators are waiting for arguments and the input is used up.
    fn terminated(&self) -> bool {
        self.ops.is_empty() && self.next_token().is_none()
    }

    /// There's an operator on the stack and either the input is used up
    /// or that operator takes precedence over the next token.
    fn reducible(&self) -> bool {
        match self.ops.peek() {
            Some(top) => match self.next_token() {
                Some(token) => takes_precedence(top.symbol(), token),
                None => true,
            },
            None => false,
        }
    }

    fn shift_arg(&mut self) {
        match self.next_token() {
            Some(token) if is_valid_argument(token) => {
                let leaf = ast::Expr::leaf(token);
                self.args.push(leaf);
                self.index += 1;
                self.state = ParserState::ExpectOp;
            }
            _ => self.fail(),
        }
    }

    fn shift_op(&mut self) {
        let op = match self.next_token() {
            Some(token) if is_valid_operator(token) => BinaryOperator::from_token(token),
            _ => return self.fail(),
        };
        match op {
            Ok(op) => {
                self.ops.push(op);
                self.index += 1;
                self.state = ParserState::ExpectArg;
            }
            Err(_) => self.fail(),
        }
    }

    /// Replace the top operator and the top two arguments with a single
    /// binary operation. The top argument is the right operand.
    fn reduce(&mut self) {
        let op = match self.ops.pop() {
            Some(op) => op,
            None => return self.underflow("operator"),
        };
        let (lhs, rhs) = match self.args.pop_pair() {
            Some(pair) => pair,
            None => return self.underflow("argument"),
        };
        log::trace!("REDUCE: {lhs} {op} {rhs}");
        self.args.push(ast::Expr::binary_op(lhs, op, rhs));
    }

    fn fail(&mut self) {
        log::trace!("FAIL @ {}: {:?}", self.index, self.next_token());
        self.state = ParserState::Done;
    }

    fn underflow(&mut self, stack_name: &str) {
        log::error!("{stack_name} stack underflow @ {}", self.index);
        self.err = Some(ParseErrKind::StackUnderflow);
        self.state = ParserState::Done;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser_expecting_op(args: Vec<ast::Expr>) -> Parser {
        let mut parser = Parser::new(vec![]);
        parser.ops.push(BinaryOperator::Add);
        for arg in args {
            parser.args.push(arg);
        }
        parser.state = ParserState::ExpectOp;
        parser
    }

    #[test]
    fn reduce_without_args_is_internal_error() {
        let mut parser = parser_expecting_op(vec![]);
        parser.step();
        assert_eq!(parser.state(), ParserState::Done);
        let err = parser.into_result().unwrap_err();
        assert_eq!(err.kind, ParseErrKind::StackUnderflow);
        assert!(err.is_internal());
    }

    #[test]
    fn reduce_with_one_arg_is_internal_error() {
        let mut parser = parser_expecting_op(vec![ast::Expr::leaf("3")]);
        assert_eq!(parser.run(), 1);
        assert_eq!(parser.arg_stack().size(), 1);
        assert!(parser.into_result().unwrap_err().is_internal());
    }
}
