/// Evaluation errors.
///
/// Defines every failure `evaluate` can report: unexpected characters,
/// trailing input, unmatched parentheses, malformed numeric literals and
/// division by zero. Each error carries the byte position where it was
/// detected.
pub mod eval_error;

pub use eval_error::{EvalError, Symbol};
