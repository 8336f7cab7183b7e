//! SQL query normalization.
//!
//! Replaces literal values with placeholders and strips comments so that
//! queries differing only in their literals share one canonical form:
//!
//! ```text
//! SELECT * FROM users WHERE id = -42 AND name = 'bob' -- lookup
//!     ──► SELECT * FROM users WHERE id = ? AND name = ?
//! ```
//!
//! # Architecture
//!
//! ```text
//! query ──► SourceBuffer ──► Normalizer (one pass) ──► trim
//!                                                       │
//!                      reduce_enums_to_one_element? ────┤
//!                                                       ▼
//!                                               collapse_enums ──► output
//! ```
//!
//! The scanning primitives live in `unparam_core`; this crate owns the
//! state machine, options and errors. Each call is independent: all state
//! is created per call, so `normalize` can run on any number of threads
//! at once.
//!
//! # Diagnostics
//!
//! Syntax errors are logged through `tracing` when
//! [`Options::write_syntax_errors_to_console`] is set. Install a subscriber
//! to see them.

mod enum_collapse;
mod error;
mod normalizer;
mod options;

pub use enum_collapse::collapse_enums;
pub use error::{NormalizeError, SyntaxError, SyntaxErrorKind};
pub use options::Options;

use normalizer::Normalizer;
use unparam_core::SourceBuffer;

/// Normalize `sql` with the given options.
///
/// Returns the canonical query text. An unterminated string literal,
/// quoted identifier or block comment is a syntax error: it is returned as
/// [`NormalizeError::Syntax`] when [`Options::throw_on_syntax_error`] is set,
/// and otherwise rendered into the returned text as
/// `"<message>: <partial output>"`.
#[tracing::instrument(level = "trace", skip_all, fields(len = sql.len()))]
pub fn normalize(sql: &str, options: &Options) -> Result<String, NormalizeError> {
    let delimiters = options.delimiters()?;
    let buffer = SourceBuffer::new(sql);

    match Normalizer::new(&buffer, delimiters, options).run() {
        Ok(output) => {
            let output = trim_output(&output, options.strip_whitespace);
            if options.reduce_enums_to_one_element {
                Ok(collapse_enums(output, options.identifier_delimiter).into_owned())
            } else {
                Ok(output.to_owned())
            }
        }
        Err(unterminated) => {
            let error = SyntaxError {
                kind: unterminated.kind,
                offset: unterminated.offset,
                query: sql.to_owned(),
                partial: trim_output(&unterminated.partial, options.strip_whitespace).to_owned(),
            };
            if options.write_syntax_errors_to_console {
                tracing::error!(offset = error.offset, query = %sql, "{}", error.kind);
            }
            if options.throw_on_syntax_error {
                Err(error.into())
            } else {
                Ok(error.returned_text())
            }
        }
    }
}

/// Normalize `sql` with [`Options::default()`].
pub fn normalize_default(sql: &str) -> Result<String, NormalizeError> {
    normalize(sql, &Options::default())
}

fn trim_output(output: &str, strip_whitespace: bool) -> &str {
    if strip_whitespace {
        output.trim()
    } else {
        output.trim_end()
    }
}
