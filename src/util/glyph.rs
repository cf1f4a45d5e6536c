use std::borrow::Cow;

/// Maps a keypad glyph to its ASCII operator, if it has one.
#[must_use]
pub const fn ascii_operator(glyph: char) -> Option<char> {
    match glyph {
        '×' | '✕' | '·' => Some('*'),
        '÷' | '∕' => Some('/'),
        '−' | '–' => Some('-'),
        _ => None,
    }
}

/// Rewrites typographic operator glyphs to the ASCII operators the
/// evaluator understands.
///
/// Characters without a mapping pass through untouched. The input is only
/// copied when at least one glyph was replaced.
///
/// ## Example
/// ```
/// use std::borrow::Cow;
///
/// use reckon::util::glyph::normalize_glyphs;
///
/// assert_eq!(normalize_glyphs("6×7÷2−1"), "6*7/2-1");
/// assert!(matches!(normalize_glyphs("6*7"), Cow::Borrowed(_)));
/// ```
#[must_use]
pub fn normalize_glyphs(input: &str) -> Cow<'_, str> {
    if !input.chars().any(|c| ascii_operator(c).is_some()) {
        return Cow::Borrowed(input);
    }
    Cow::Owned(input.chars()
                    .map(|c| ascii_operator(c).unwrap_or(c))
                    .collect())
}
