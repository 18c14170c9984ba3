//! Binary operators accepted by the parser. Each operator is a single
//! character token separated from its arguments by whitespace.
use std::fmt;

/// Binary arithmetic operators.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub enum BinaryOperator {
    Mul,
    Div,
    Add,
    Sub,
}

impl BinaryOperator {
    pub fn from_token(token: &str) -> Result<Self, String> {
        let op = match token {
            "*" => Self::Mul,
            "/" => Self::Div,
            "+" => Self::Add,
            "-" => Self::Sub,
            _ => return Err(format!("Unknown binary operator: {token}")),
        };
        Ok(op)
    }

    /// The token this operator is scanned from.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Mul => "*",
            Self::Div => "/",
            Self::Add => "+",
            Self::Sub => "-",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Debug for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}
