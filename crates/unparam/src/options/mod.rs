//! Per-call normalization options.

use crate::NormalizeError;

/// Options for a single [`normalize`](crate::normalize) call.
///
/// The defaults follow MySQL conventions: backtick-quoted identifiers,
/// strings in either `'` or `"`, whitespace collapsed, and syntax errors
/// both logged and returned as `Err`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct Options {
    /// Treat `"` as an identifier delimiter instead of a string delimiter.
    pub ansi_double_quotes: bool,
    /// Delimiter written around identifiers in the output.
    ///
    /// Input identifiers may use either this character or the dialect's
    /// alternate identifier quote. Must be ASCII punctuation.
    pub identifier_delimiter: char,
    /// Collapse whitespace runs to one space and trim both ends.
    ///
    /// When `false`, spaces pass through, each tab/CR/LF becomes a single
    /// space, and only trailing whitespace is trimmed.
    pub strip_whitespace: bool,
    /// Log syntax errors through `tracing` at `error` level.
    pub write_syntax_errors_to_console: bool,
    /// Return syntax errors as `Err`. When `false` the error message and
    /// the partial output are returned as `Ok` text instead.
    pub throw_on_syntax_error: bool,
    /// Render string placeholders as `'?'` instead of `?`.
    pub add_removed_string_quotes: bool,
    /// Collapse placeholder lists in `IN (...)` and `FIELD(...)` to one
    /// placeholder.
    pub reduce_enums_to_one_element: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            ansi_double_quotes: false,
            identifier_delimiter: '`',
            strip_whitespace: true,
            write_syntax_errors_to_console: true,
            throw_on_syntax_error: true,
            add_removed_string_quotes: false,
            reduce_enums_to_one_element: false,
        }
    }
}

impl Options {
    #[must_use]
    pub fn with_ansi_double_quotes(mut self, enabled: bool) -> Self {
        self.ansi_double_quotes = enabled;
        self
    }

    #[must_use]
    pub fn with_identifier_delimiter(mut self, delimiter: char) -> Self {
        self.identifier_delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_strip_whitespace(mut self, enabled: bool) -> Self {
        self.strip_whitespace = enabled;
        self
    }

    #[must_use]
    pub fn with_write_syntax_errors_to_console(mut self, enabled: bool) -> Self {
        self.write_syntax_errors_to_console = enabled;
        self
    }

    #[must_use]
    pub fn with_throw_on_syntax_error(mut self, enabled: bool) -> Self {
        self.throw_on_syntax_error = enabled;
        self
    }

    #[must_use]
    pub fn with_add_removed_string_quotes(mut self, enabled: bool) -> Self {
        self.add_removed_string_quotes = enabled;
        self
    }

    #[must_use]
    pub fn with_reduce_enums_to_one_element(mut self, enabled: bool) -> Self {
        self.reduce_enums_to_one_element = enabled;
        self
    }

    /// Placeholder written in place of a string literal.
    pub(crate) fn string_placeholder(&self) -> &'static str {
        if self.add_removed_string_quotes {
            "'?'"
        } else {
            "?"
        }
    }

    /// Resolve the dialect into the quote bytes the scanner dispatches on.
    pub(crate) fn delimiters(&self) -> Result<Delimiters, NormalizeError> {
        let identifier = u8::try_from(self.identifier_delimiter)
            .ok()
            .filter(u8::is_ascii_punctuation)
            .ok_or(NormalizeError::InvalidIdentifierDelimiter(
                self.identifier_delimiter,
            ))?;

        let (alternate_identifier, alternate_string) = if self.ansi_double_quotes {
            (b'"', b'\'')
        } else {
            (b'`', b'"')
        };

        Ok(Delimiters {
            identifier,
            alternate_identifier,
            alternate_string,
        })
    }
}

/// Quote bytes for one scan.
///
/// `'` always opens a string. The alternates swap between the MySQL
/// dialect (`` ` `` identifiers, `"` strings) and the ANSI dialect (`"`
/// identifiers).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Delimiters {
    /// Configured identifier delimiter, also written to the output.
    pub identifier: u8,
    pub alternate_identifier: u8,
    pub alternate_string: u8,
}

impl Delimiters {
    pub(crate) fn opens_identifier(self, b: u8) -> bool {
        b == self.identifier || b == self.alternate_identifier
    }

    pub(crate) fn opens_string(self, b: u8) -> bool {
        b == b'\'' || b == self.alternate_string
    }
}
