/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INT: f64 = 9_007_199_254_740_991.0;

/// Converts an `f64` to `i64` if and only if it is integral and exactly
/// representable.
///
/// ## Parameters
/// - `value`: The float to convert.
///
/// ## Returns
/// - `Some(i64)`: The integer value, with `-0.0` mapped to `0`.
/// - `None`: If the value is fractional, non-finite, or larger than
///   [`MAX_SAFE_INT`] in magnitude.
///
/// ## Example
/// ```
/// use reckon::util::num::{MAX_SAFE_INT, f64_to_i64_exact};
///
/// assert_eq!(f64_to_i64_exact(42.0), Some(42));
/// assert_eq!(f64_to_i64_exact(-0.0), Some(0));
/// assert_eq!(f64_to_i64_exact(2.5), None);
/// assert_eq!(f64_to_i64_exact(MAX_SAFE_INT + 1.0), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_i64_exact(value: f64) -> Option<i64> {
    if !value.is_finite() || value.fract() != 0.0 || value.abs() > MAX_SAFE_INT {
        return None;
    }
    Some(value as i64)
}

/// Formats an evaluation result for display.
///
/// Integral results render without a fractional part (`14`, not `14.0`).
/// Other results use the shortest decimal text that round-trips through
/// `f64` parsing, which never contains an exponent. Feeding the returned
/// text back into [`evaluate`](crate::evaluate) reproduces `value` for every
/// finite input.
///
/// ## Example
/// ```
/// use reckon::util::num::format_result;
///
/// assert_eq!(format_result(14.0), "14");
/// assert_eq!(format_result(11.5), "11.5");
/// assert_eq!(format_result(-0.0), "0");
/// assert_eq!(format_result(0.1 + 0.2), "0.30000000000000004");
/// ```
#[must_use]
pub fn format_result(value: f64) -> String {
    f64_to_i64_exact(value).map_or_else(|| value.to_string(), |int| int.to_string())
}
