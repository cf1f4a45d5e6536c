/// Entry points and shared result types.
///
/// Contains [`core::evaluate`], the top-level routine that drives a cursor
/// through one full expression and rejects trailing input.
pub mod core;

/// Binary operator levels.
///
/// Implements the left-associative `expression` (`+`, `-`) and `term`
/// (`*`, `/`) loops, and applies each operator as soon as its right operand
/// is known.
pub mod binary;

/// Unary sign, grouping and literals.
///
/// Implements `factor`: prefix `+`/`-`, parenthesized sub-expressions and
/// numeric literal conversion.
pub mod unary;
