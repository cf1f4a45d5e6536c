//! # reckon
//!
//! reckon is an arithmetic expression evaluator written in Rust.
//! It evaluates numbers combined with `+`, `-`, `*`, `/`, unary signs and
//! parentheses in double precision, and reports every failure as a typed
//! [`EvalError`](error::EvalError) with the position it occurred at.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides the error type returned by evaluation.
///
/// This module defines every way an evaluation can fail. Each error names its
/// kind and the byte position in the input where it was detected, so callers
/// can render a message or point at the offending character.
///
/// # Responsibilities
/// - Defines `EvalError` for all failure modes.
/// - Defines `Symbol`, the character-or-end-of-input value carried by
///   unexpected-character errors.
/// - Implements `std::error::Error` and `Display` for reporting.
pub mod error;
/// Evaluates expression text.
///
/// This module ties together the lexer, the forward-only cursor and the
/// recursive-descent parser that computes values as it goes.
///
/// # Responsibilities
/// - Splits input into numbers, operators, parentheses and spaces.
/// - Tracks the scan position and the single lookahead symbol.
/// - Applies operator precedence and reports the first failure.
pub mod interpreter;
/// General utilities for calculator front ends.
///
/// This module holds the helpers that sit around the evaluator rather than
/// inside it: formatting results for display and translating keypad glyphs
/// into the ASCII operators the grammar accepts.
pub mod util;

use crate::error::EvalError;

/// Evaluates an arithmetic expression.
///
/// Each call scans `expression` with its own cursor, so calls are
/// independent and may run concurrently from any number of threads.
///
/// # Errors
/// Returns an [`EvalError`] for unexpected characters, trailing input,
/// unmatched parentheses, malformed numeric literals and division by zero.
///
/// # Examples
/// ```
/// use reckon::{error::{EvalError, Symbol}, evaluate};
///
/// assert_eq!(evaluate("2+(3*4)-(5/2)").unwrap(), 11.5);
/// assert_eq!(evaluate("--5").unwrap(), 5.0);
///
/// assert_eq!(evaluate("5+10/0"), Err(EvalError::DivisionByZero { position: 4 }));
/// assert_eq!(evaluate(""),
///            Err(EvalError::UnexpectedCharacter { found:    Symbol::EndOfInput,
///                                                 position: 0, }));
/// ```
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    interpreter::parser::core::evaluate(expression)
}
