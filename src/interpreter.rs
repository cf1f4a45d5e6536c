/// The cursor module tracks the scan position over one input string.
///
/// It wraps the lexer with a single lexeme of lookahead, only ever moves
/// forward, and implements the space-skipping `eat` check used at every
/// operator and parenthesis decision point.
pub mod cursor;
/// The lexer module tokenizes expression text.
///
/// Produces numbers, the four operators, parentheses and runs of spaces.
/// Everything else becomes a lexer error carrying the offending character.
pub mod lexer;
/// The parser module evaluates expressions by recursive descent.
///
/// Each grammar rule (`expression`, `term`, `factor`) is a function that
/// consumes tokens from the cursor and returns the computed value directly,
/// so the first failure aborts the whole evaluation.
///
/// # Responsibilities
/// - Enforces `*`/`/` precedence over `+`/`-` with left associativity.
/// - Handles unary signs and parenthesized groups.
/// - Reports division by zero, unmatched parentheses, malformed literals and
///   unexpected or trailing characters with their positions.
pub mod parser;
