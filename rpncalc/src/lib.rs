//! Evaluate reverse polish math expressions, eg: `3 4 2 * 1 5 - 2 3 / +`.
//!
//! Sub-expressions may be grouped in brackets, `(3.141 (2 3 +) (1.571 sin) *)`,
//! the groups are flattened into plain postfix before evaluation.

pub use flatten::{flatten, ParseError, Postfix};
pub use registry::{Operator, Registry};
pub use rpneval::{Calculator, EvalErr, Residual};

mod flatten;
#[cfg(test)]
mod flatten_test;
mod registry;
mod rpneval;
mod scanner;

/// Flatten and evaluate `expr` with the standard operators.
pub fn evaluate(expr: &str) -> Result<f64, EvalErr> {
    Calculator::new().evaluate(expr)
}
