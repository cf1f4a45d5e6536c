use std::fmt;

use crate::{
    error::EvalError,
    interpreter::{
        cursor::Cursor,
        lexer::Token,
        parser::{core::EvalResult, unary::parse_unary},
    },
};

/// The four binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Returns `true` for the lower precedence level, `+` and `-`.
    #[must_use]
    pub const fn is_additive(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }

    /// Returns `true` for the higher precedence level, `*` and `/`.
    #[must_use]
    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Mul | Self::Div)
    }

    /// Applies the operator to two operands.
    ///
    /// Division checks its divisor explicitly: a divisor equal to `0.0`
    /// (including `-0.0`) is an error rather than an infinity or NaN. The
    /// other operators cannot fail.
    ///
    /// # Parameters
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Byte offset of the operator, for error reporting.
    ///
    /// # Example
    /// ```
    /// use reckon::{error::EvalError, interpreter::parser::binary::BinaryOperator};
    ///
    /// assert_eq!(BinaryOperator::Mul.apply(1.5, 2.0, 0).unwrap(), 3.0);
    /// assert_eq!(BinaryOperator::Div.apply(1.0, 0.0, 7),
    ///            Err(EvalError::DivisionByZero { position: 7 }));
    /// ```
    #[allow(clippy::float_cmp)]
    pub fn apply(self, left: f64, right: f64, position: usize) -> EvalResult<f64> {
        Ok(match self {
               Self::Add => left + right,
               Self::Sub => left - right,
               Self::Mul => left * right,
               Self::Div => {
                   if right == 0.0 {
                       return Err(EvalError::DivisionByZero { position });
                   }
                   left / right
               },
           })
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Add => "+",
                        Self::Sub => "-",
                        Self::Mul => "*",
                        Self::Div => "/",
                    })
    }
}

/// Maps a token to its binary operator, if it is one.
#[must_use]
pub const fn token_to_binary_operator(token: Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}

/// Consumes the next operator if it belongs to the requested level.
///
/// Spaces before the operator are skipped even when no operator follows,
/// which mirrors how `eat` behaves for single tokens.
fn eat_operator(cursor: &mut Cursor<'_>,
                level: fn(BinaryOperator) -> bool)
                -> Option<(BinaryOperator, usize)> {
    cursor.skip_spaces();
    let op = cursor.peek()
                   .and_then(token_to_binary_operator)
                   .filter(|op| level(*op))?;
    let position = cursor.position();
    cursor.advance();
    Some((op, position))
}

/// Parses and evaluates addition and subtraction.
///
/// Handles the left-associative binary operators `+` and `-`, so `8-3-2`
/// is `(8-3)-2`.
///
/// The rule is: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `cursor`: Scan context positioned at the first term.
///
/// # Returns
/// The accumulated value of all terms.
pub fn parse_additive(cursor: &mut Cursor<'_>) -> EvalResult<f64> {
    let mut left = parse_multiplicative(cursor)?;
    while let Some((op, position)) = eat_operator(cursor, BinaryOperator::is_additive) {
        let right = parse_multiplicative(cursor)?;
        log::trace!("{left} {op} {right}");
        left = op.apply(left, right, position)?;
    }
    Ok(left)
}

/// Parses and evaluates multiplication and division.
///
/// Handles the left-associative binary operators `*` and `/`. A zero
/// divisor aborts the evaluation with [`EvalError::DivisionByZero`] pointing
/// at the `/`.
///
/// The rule is: `term := factor (("*" | "/") factor)*`
///
/// # Parameters
/// - `cursor`: Scan context positioned at the first factor.
///
/// # Returns
/// The accumulated value of all factors.
pub fn parse_multiplicative(cursor: &mut Cursor<'_>) -> EvalResult<f64> {
    let mut left = parse_unary(cursor)?;
    while let Some((op, position)) = eat_operator(cursor, BinaryOperator::is_multiplicative) {
        let right = parse_unary(cursor)?;
        log::trace!("{left} {op} {right}");
        left = op.apply(left, right, position)?;
    }
    Ok(left)
}
