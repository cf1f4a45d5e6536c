use std::fmt;

/// The lookahead symbol an error refers to.
///
/// Either a concrete character from the input or the sentinel used once the
/// cursor has moved past the last character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// A character found in the input.
    Char(char),
    /// The input ended where more was expected.
    EndOfInput,
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "'{c}'"),
            Self::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// Represents all errors that can occur while evaluating an expression.
///
/// Positions are byte offsets into the evaluated string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// Found a symbol the grammar cannot consume at this point.
    #[error("Error at position {position}: Unexpected {found}.")]
    UnexpectedCharacter {
        /// The character encountered, or the end-of-input sentinel.
        found:    Symbol,
        /// Where the symbol was found.
        position: usize,
    },
    /// The divisor of a `/` evaluated to zero.
    #[error("Error at position {position}: Division by zero.")]
    DivisionByZero {
        /// The position of the `/` operator.
        position: usize,
    },
    /// An opening parenthesis `(` was never closed.
    #[error("Error at position {position}: Opening parenthesis '(' has no matching ')'.")]
    UnmatchedParen {
        /// The position of the unmatched `(`.
        position: usize,
    },
    /// Input remained after a complete expression was parsed.
    #[error("Error at position {position}: Extra input after expression, starting with '{found}'.")]
    TrailingInput {
        /// The first unconsumed character.
        found:    char,
        /// Where the unconsumed input starts.
        position: usize,
    },
    /// A run of digits and dots that is not a valid number, such as `1.2.3`.
    #[error("Error at position {position}: Malformed number '{literal}'.")]
    MalformedNumber {
        /// The literal exactly as it appeared in the input.
        literal:  String,
        /// Where the literal starts.
        position: usize,
    },
    /// Parenthesized groups were nested deeper than the evaluator allows.
    #[error("Error at position {position}: Parentheses nested deeper than {max_depth} levels.")]
    NestingTooDeep {
        /// The position of the `(` that exceeded the limit.
        position:  usize,
        /// The maximum number of open groups.
        max_depth: usize,
    },
}

impl EvalError {
    /// Returns the byte offset the error points at.
    ///
    /// # Example
    /// ```
    /// use reckon::{evaluate, error::EvalError};
    ///
    /// let err = evaluate("1 + (2").unwrap_err();
    /// assert_eq!(err, EvalError::UnmatchedParen { position: 4 });
    /// assert_eq!(err.position(), 4);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { position, .. }
            | Self::DivisionByZero { position }
            | Self::UnmatchedParen { position }
            | Self::TrailingInput { position, .. }
            | Self::MalformedNumber { position, .. }
            | Self::NestingTooDeep { position, .. } => *position,
        }
    }
}
