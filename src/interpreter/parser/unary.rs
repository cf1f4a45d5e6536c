use crate::{
    error::EvalError,
    interpreter::{
        cursor::Cursor,
        lexer::Token,
        parser::core::{EvalResult, parse_expression},
    },
};

/// Maximum number of parenthesized groups that may be open at once.
///
/// Each open group costs several native stack frames, so the limit keeps
/// deeply nested input from exhausting the stack.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parses and evaluates a factor.
///
/// Supports prefix operators:
/// - `+` (identity)
/// - `-` (numeric negation)
///
/// Prefix operators are right-recursive in the grammar, so `--5` is `-(-5)`
/// and `+-5` is `+(-5)`. They are consumed in a loop and applied as a single
/// negation when the count of `-` is odd, so any number of signs is
/// accepted. Without a prefix, the factor must be a parenthesized group or
/// a numeric literal.
///
/// Grammar:
/// ```text
///     factor := ("+" | "-") factor
///             | "(" expression ")"
///             | number
/// ```
///
/// # Parameters
/// - `cursor`: Scan context positioned at the start of a factor.
///
/// # Errors
/// [`EvalError::UnexpectedCharacter`] when the lookahead can start none of
/// the alternatives. At the end of input, the reported symbol is
/// [`Symbol::EndOfInput`](crate::error::Symbol::EndOfInput).
pub(crate) fn parse_unary(cursor: &mut Cursor<'_>) -> EvalResult<f64> {
    let mut negate = false;
    loop {
        if cursor.eat(Token::Plus).is_some() {
            continue;
        }
        if cursor.eat(Token::Minus).is_some() {
            negate = !negate;
            continue;
        }
        break;
    }

    let value = parse_primary(cursor)?;
    Ok(if negate { -value } else { value })
}

/// Parses a parenthesized group or a numeric literal.
fn parse_primary(cursor: &mut Cursor<'_>) -> EvalResult<f64> {
    if let Some(open) = cursor.eat(Token::LParen) {
        return parse_grouping(cursor, open);
    }
    if let Some((literal, position)) = cursor.take_number() {
        return parse_number(literal, position);
    }

    let found = cursor.symbol();
    let position = cursor.position();
    log::trace!("no factor can start with {found} at {position}");
    Err(EvalError::UnexpectedCharacter { found, position })
}

/// Parses the rest of a parenthesized group after its `(`.
///
/// # Parameters
/// - `cursor`: Scan context positioned just after the opening parenthesis.
/// - `open`: Byte offset of the opening parenthesis.
///
/// # Errors
/// - [`EvalError::NestingTooDeep`] pointing at `open` if
///   [`MAX_NESTING_DEPTH`] groups are already open.
/// - [`EvalError::UnmatchedParen`] pointing at `open` if the group is not
///   closed right after its inner expression.
fn parse_grouping(cursor: &mut Cursor<'_>, open: usize) -> EvalResult<f64> {
    if cursor.nesting() >= MAX_NESTING_DEPTH {
        return Err(EvalError::NestingTooDeep { position:  open,
                                               max_depth: MAX_NESTING_DEPTH, });
    }

    cursor.enter_group();
    let value = parse_expression(cursor);
    cursor.leave_group();

    let value = value?;
    if cursor.eat(Token::RParen).is_none() {
        return Err(EvalError::UnmatchedParen { position: open });
    }
    Ok(value)
}

/// Converts a numeric literal to `f64`.
///
/// The lexer accepts any run of digits and dots, so the standard float
/// parser has the final word: `1.`, `.5` and `007` are accepted, while `.`
/// and `1.2.3` are rejected.
///
/// # Errors
/// [`EvalError::MalformedNumber`] if the literal is not a valid float.
///
/// # Example
/// ```
/// use reckon::{error::EvalError, interpreter::parser::unary::parse_number};
///
/// assert_eq!(parse_number(".5", 0).unwrap(), 0.5);
/// assert_eq!(parse_number("1.2.3", 4),
///            Err(EvalError::MalformedNumber { literal:  "1.2.3".to_string(),
///                                             position: 4, }));
/// ```
pub fn parse_number(literal: &str, position: usize) -> EvalResult<f64> {
    literal.parse::<f64>()
           .map_err(|_| EvalError::MalformedNumber { literal: literal.to_string(),
                                                     position })
}
