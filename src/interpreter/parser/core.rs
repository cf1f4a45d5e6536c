use crate::{
    error::{EvalError, Symbol},
    interpreter::{cursor::Cursor, parser::binary::parse_additive},
};

pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates a complete expression string.
///
/// Creates a fresh [`Cursor`] over `source`, parses one `expression`, and
/// then requires that the whole input was consumed. The operator loops skip
/// spaces before giving up, so trailing spaces never count as leftover
/// input.
///
/// # Errors
/// - [`EvalError::TrailingInput`] if characters remain after the expression.
/// - Any error raised while parsing the expression itself.
///
/// # Example
/// ```
/// use reckon::interpreter::parser::core::evaluate;
///
/// assert_eq!(evaluate("2+3*4").unwrap(), 14.0);
/// assert!(evaluate("2+3)").is_err());
/// ```
pub fn evaluate(source: &str) -> EvalResult<f64> {
    log::debug!("evaluating {source:?}");

    let mut cursor = Cursor::new(source);
    let value = parse_expression(&mut cursor)?;

    if let Symbol::Char(found) = cursor.symbol() {
        let position = cursor.position();
        log::debug!("trailing input {found:?} at {position}");
        return Err(EvalError::TrailingInput { found, position });
    }

    log::debug!("{source:?} = {value}");
    Ok(value)
}

/// Parses and evaluates a full expression.
///
/// This is the entry point of the recursive descent. It begins at the
/// lowest-precedence level, addition and subtraction.
///
/// Grammar: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `cursor`: Scan context positioned at the start of the expression.
///
/// # Returns
/// The value of the expression.
pub fn parse_expression(cursor: &mut Cursor<'_>) -> EvalResult<f64> {
    parse_additive(cursor)
}
