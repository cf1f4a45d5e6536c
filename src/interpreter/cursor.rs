use logos::{Lexer, Logos};

use crate::{error::Symbol, interpreter::lexer::Token};

/// A single lexeme under the cursor.
///
/// `token` is `None` when the lexer could not recognize the text, in which
/// case `text` holds the offending character.
#[derive(Debug, Clone, Copy)]
struct Lexeme<'src> {
    token: Option<Token>,
    text:  &'src str,
    start: usize,
}

/// Forward-only scan context over one input string.
///
/// Holds the lexer and a one-lexeme lookahead. The cursor never rewinds, and
/// a fresh cursor is created for every evaluation, so no state leaks between
/// calls.
///
/// Spaces are only skipped by [`Cursor::eat`] and [`Cursor::skip_spaces`].
/// A numeric literal is read from the lookahead as-is, which means spaces
/// are never consumed inside a literal.
///
/// # Example
/// ```
/// use reckon::interpreter::{cursor::Cursor, lexer::Token};
///
/// let mut cursor = Cursor::new("  ( 12");
/// assert_eq!(cursor.eat(Token::LParen), Some(2));
/// assert_eq!(cursor.peek(), Some(Token::Space));
/// cursor.skip_spaces();
/// assert_eq!(cursor.take_number(), Some(("12", 4)));
/// assert_eq!(cursor.position(), 6);
/// ```
pub struct Cursor<'src> {
    lexer:   Lexer<'src, Token>,
    current: Option<Lexeme<'src>>,
    nesting: usize,
}

impl<'src> Cursor<'src> {
    /// Creates a cursor positioned at the first lexeme of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        let mut cursor = Self { lexer:   Token::lexer(source),
                                current: None,
                                nesting: 0, };
        cursor.advance();
        cursor
    }

    /// Moves the lookahead to the next lexeme.
    pub fn advance(&mut self) {
        let next = self.lexer.next();
        self.current = next.map(|result| Lexeme { token: result.ok(),
                                                  text:  self.lexer.slice(),
                                                  start: self.lexer.span().start, });
    }

    /// Returns the lookahead token, or `None` at the end of input or on an
    /// unrecognized character.
    #[must_use]
    pub fn peek(&self) -> Option<Token> {
        self.current.and_then(|lexeme| lexeme.token)
    }

    /// Byte offset of the lookahead, or the input length at the end.
    #[must_use]
    pub fn position(&self) -> usize {
        self.current
            .map_or_else(|| self.lexer.source().len(), |lexeme| lexeme.start)
    }

    /// The first character of the lookahead, or [`Symbol::EndOfInput`].
    #[must_use]
    pub fn symbol(&self) -> Symbol {
        self.current
            .and_then(|lexeme| lexeme.text.chars().next())
            .map_or(Symbol::EndOfInput, Symbol::Char)
    }

    /// Skips any run of spaces under the lookahead.
    pub fn skip_spaces(&mut self) {
        while self.peek() == Some(Token::Space) {
            self.advance();
        }
    }

    /// Skips spaces, then consumes `expected` if it is the lookahead.
    ///
    /// Returns the byte offset of the consumed token. When the lookahead does
    /// not match, nothing but the spaces is consumed.
    pub fn eat(&mut self, expected: Token) -> Option<usize> {
        self.skip_spaces();
        if self.peek() != Some(expected) {
            return None;
        }
        let position = self.position();
        self.advance();
        Some(position)
    }

    /// Consumes a numeric literal at the lookahead without skipping spaces.
    ///
    /// Returns the literal text together with its byte offset.
    pub fn take_number(&mut self) -> Option<(&'src str, usize)> {
        let lexeme = self.current?;
        if lexeme.token != Some(Token::Number) {
            return None;
        }
        self.advance();
        Some((lexeme.text, lexeme.start))
    }

    /// Number of parenthesized groups currently open.
    #[must_use]
    pub const fn nesting(&self) -> usize {
        self.nesting
    }

    /// Records that a `(` was consumed.
    pub const fn enter_group(&mut self) {
        self.nesting += 1;
    }

    /// Records that a group was left, either closed or abandoned on error.
    pub const fn leave_group(&mut self) {
        self.nesting = self.nesting.saturating_sub(1);
    }
}
