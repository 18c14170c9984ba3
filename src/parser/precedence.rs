use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Map of operators to their precedence. Operators with a higher number
/// bind more tightly to their arguments.
pub static PRECEDENCE: Lazy<HashMap<&'static str, u8>> = Lazy::new(|| {
    [
        ("*", 2), // a * b
        ("/", 2), // a / b
        ("+", 1), // a + b
        ("-", 1), // a - b
    ]
    .iter()
    .cloned()
    .collect()
});

/// Get precedence of token, or `None` if the token isn't an operator.
pub fn get_precedence(token: &str) -> Option<u8> {
    PRECEDENCE.get(token).copied()
}

/// Return true if `op1`, the operator on top of the operator stack,
/// claims the argument it shares with `op2`, the next operator in the
/// input.
///
/// Ties go to `op1`, which makes operators of equal precedence
/// associate to the left: `a - b - c` is `(a - b) - c`.
///
/// If either token isn't an operator, the result is false.
pub fn takes_precedence(op1: &str, op2: &str) -> bool {
    match (get_precedence(op1), get_precedence(op2)) {
        (Some(p1), Some(p2)) => p1 >= p2,
        _ => false,
    }
}
