//! Error types.
//!
//! Every syntax error is detected at end of input while a delimited scope
//! is still open. Scanning stops at the first one; there is no recovery.

use thiserror::Error;

/// Which delimited scope was left open at end of input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum SyntaxErrorKind {
    /// Missing closing `'` or `"` for a string literal.
    #[error("Syntax error looking for ending string literal delimiter, reached end of string")]
    UnterminatedString,
    /// Missing closing delimiter for a quoted identifier.
    #[error("Syntax error looking for ending identifier delimiter, reached end of string")]
    UnterminatedIdentifier,
    /// Missing `*/` for a block comment.
    #[error("Syntax error looking for ending block comment delimiter, reached end of string")]
    UnterminatedBlockComment,
}

/// A syntax error in the query being normalized.
///
/// Displays as `"<message>: <query>"`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}: {query}")]
pub struct SyntaxError {
    /// What was left unterminated.
    pub kind: SyntaxErrorKind,
    /// Byte offset of the opening delimiter.
    pub offset: usize,
    /// The original query.
    pub query: String,
    /// Output produced before scanning stopped, trimmed like a normal
    /// result.
    pub partial: String,
}

impl SyntaxError {
    /// The text returned in place of a normalized query when errors are
    /// not thrown: `"<message>: <partial output>"`.
    pub fn returned_text(&self) -> String {
        format!("{}: {}", self.kind, self.partial)
    }
}

/// Error returned by [`normalize`](crate::normalize).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// The configured identifier delimiter cannot be scanned for.
    #[error("identifier delimiter {0:?} must be a single ASCII punctuation character")]
    InvalidIdentifierDelimiter(char),
}
