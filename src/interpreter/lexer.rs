use logos::Logos;

/// Represents a lexical token in the expression input.
///
/// Spaces are emitted as tokens rather than skipped, so the parser decides
/// where whitespace is tolerated. Any character not listed here surfaces as a
/// lexer error, which the cursor reports as the offending character.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// Numeric literal tokens: a maximal run of digits and dots, such as `42`,
    /// `3.14`, `.5` or even `1.2.3`. Validity is decided when the literal is
    /// converted to `f64`.
    #[regex(r"[0-9.]+")]
    Number,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// One or more U+0020 spaces. Tabs are not included.
    #[regex(" +")]
    Space,
}
