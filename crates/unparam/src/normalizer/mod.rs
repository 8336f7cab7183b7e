//! The single-pass normalizer state machine.
//!
//! The scanner walks the query once. At every position exactly one
//! [`ScanMode`] is active, and each mode has one step function that consumes
//! input, appends to the output, and returns the next mode. Dispatch order
//! follows the enum: string literal, identifier, name, number, block
//! comment, line comment, normal.
//!
//! The only context beyond the current byte is the bounded lookahead and
//! lookbehind of sign folding, which reads the immutable source through
//! [`unparam_core::sign`], never the output.

use unparam_core::char_class::{
    is_digit, is_line_whitespace, is_name_continue, is_name_start, is_number_continue,
    is_whitespace,
};
use unparam_core::{sign, Cursor, SourceBuffer};

use crate::options::{Delimiters, Options};
use crate::SyntaxErrorKind;

/// Scanner state at the current position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ScanMode {
    /// Between tokens.
    Normal,
    /// Just past an opening string quote; the placeholder is not yet written.
    StringLiteral { delimiter: u8 },
    /// Inside a quoted identifier opened by `delimiter`.
    Identifier { delimiter: u8 },
    /// After the first byte of a bare name.
    Name,
    /// On the first digit of a numeric literal.
    Number,
    BlockComment,
    LineComment,
}

impl ScanMode {
    /// The error reported when input ends in this mode, if any.
    fn unterminated(self) -> Option<SyntaxErrorKind> {
        match self {
            Self::StringLiteral { .. } => Some(SyntaxErrorKind::UnterminatedString),
            Self::Identifier { .. } => Some(SyntaxErrorKind::UnterminatedIdentifier),
            Self::BlockComment => Some(SyntaxErrorKind::UnterminatedBlockComment),
            Self::Normal | Self::Name | Self::Number | Self::LineComment => None,
        }
    }
}

/// A scan that stopped inside an open scope.
#[derive(Debug)]
pub(crate) struct Unterminated {
    pub kind: SyntaxErrorKind,
    /// Byte offset of the scope's opening delimiter.
    pub offset: usize,
    /// Output produced so far, untrimmed.
    pub partial: String,
}

/// Per-call scanner state. Created fresh for every query.
pub(crate) struct Normalizer<'a> {
    cursor: Cursor<'a>,
    /// Immutable source bytes for sign-folding lookaround.
    source: &'a [u8],
    delimiters: Delimiters,
    strip_whitespace: bool,
    string_placeholder: &'static str,
    mode: ScanMode,
    /// Offset of the most recently opened string, identifier or block comment.
    scope_start: usize,
    output: String,
    /// Set after a collapsed whitespace run; only used when stripping.
    previous_whitespace: bool,
}

impl<'a> Normalizer<'a> {
    pub(crate) fn new(
        buffer: &'a SourceBuffer<'_>,
        delimiters: Delimiters,
        options: &Options,
    ) -> Self {
        Self {
            cursor: buffer.cursor(),
            source: buffer.as_bytes(),
            delimiters,
            strip_whitespace: options.strip_whitespace,
            string_placeholder: options.string_placeholder(),
            mode: ScanMode::Normal,
            scope_start: 0,
            output: String::with_capacity(buffer.len()),
            previous_whitespace: false,
        }
    }

    /// Scan the whole query, returning the untrimmed output.
    pub(crate) fn run(mut self) -> Result<String, Unterminated> {
        while !self.cursor.is_eof() {
            match self.step() {
                Ok(mode) => self.mode = mode,
                Err(kind) => return Err(self.into_unterminated(kind)),
            }
        }
        match self.mode.unterminated() {
            Some(kind) => Err(self.into_unterminated(kind)),
            None => Ok(self.output),
        }
    }

    fn into_unterminated(self, kind: SyntaxErrorKind) -> Unterminated {
        Unterminated {
            kind,
            offset: self.scope_start,
            partial: self.output,
        }
    }

    /// Advance by one regime of the current mode.
    fn step(&mut self) -> Result<ScanMode, SyntaxErrorKind> {
        match self.mode {
            ScanMode::StringLiteral { delimiter } => self.string_literal(delimiter),
            ScanMode::Identifier { delimiter } => self.identifier(delimiter),
            ScanMode::Name => Ok(self.name()),
            ScanMode::Number => Ok(self.number()),
            ScanMode::BlockComment => self.block_comment(),
            ScanMode::LineComment => Ok(self.line_comment()),
            ScanMode::Normal => Ok(self.normal()),
        }
    }

    // ─── Delimited Scopes ──────────────────────────────────────────

    /// Replace the literal with one placeholder and skip to its closing
    /// quote. A backslash escapes the next byte; a doubled quote is an
    /// escaped quote.
    fn string_literal(&mut self, delimiter: u8) -> Result<ScanMode, SyntaxErrorKind> {
        self.output.push_str(self.string_placeholder);
        loop {
            match self.cursor.skip_to_string_delim(delimiter) {
                0 => return Err(SyntaxErrorKind::UnterminatedString),
                b'\\' => self.cursor.advance_n(2),
                _ if self.cursor.peek() == delimiter => self.cursor.advance_n(2),
                _ => {
                    self.cursor.advance();
                    return Ok(ScanMode::Normal);
                }
            }
        }
    }

    /// Copy the identifier verbatim and close it with the configured
    /// delimiter, whichever quote opened it.
    fn identifier(&mut self, delimiter: u8) -> Result<ScanMode, SyntaxErrorKind> {
        let start = self.cursor.pos();
        let closed = self.cursor.eat_until(delimiter);
        self.output.push_str(self.cursor.slice_from(start));
        if !closed {
            return Err(SyntaxErrorKind::UnterminatedIdentifier);
        }
        self.cursor.advance();
        self.output.push(char::from(self.delimiters.identifier));
        Ok(ScanMode::Normal)
    }

    fn block_comment(&mut self) -> Result<ScanMode, SyntaxErrorKind> {
        if self.cursor.eat_past_block_comment_end() {
            Ok(ScanMode::Normal)
        } else {
            Err(SyntaxErrorKind::UnterminatedBlockComment)
        }
    }

    /// The line terminator is left for normal mode to render.
    fn line_comment(&mut self) -> ScanMode {
        self.cursor.eat_until_line_end();
        ScanMode::Normal
    }

    // ─── Names & Numbers ───────────────────────────────────────────

    /// Copy the rest of a bare name so digits inside it are never read as
    /// numbers.
    fn name(&mut self) -> ScanMode {
        let start = self.cursor.pos();
        self.cursor.eat_while(is_name_continue);
        self.output.push_str(self.cursor.slice_from(start));
        ScanMode::Normal
    }

    /// Replace a decimal, hex, or exponential literal with `?`.
    fn number(&mut self) -> ScanMode {
        self.output.push('?');
        let mut prev = 0;
        loop {
            let b = self.cursor.current();
            let exponent_sign = b == b'-' && matches!(prev, b'e' | b'E');
            if !is_number_continue(b) && !exponent_sign {
                break;
            }
            prev = b;
            self.cursor.advance();
        }
        ScanMode::Normal
    }

    // ─── Normal ────────────────────────────────────────────────────

    fn normal(&mut self) -> ScanMode {
        let b = self.cursor.current();

        if self.strip_whitespace {
            if is_whitespace(b) {
                if !self.previous_whitespace && !self.output.ends_with(' ') {
                    self.output.push(' ');
                }
                self.previous_whitespace = true;
                self.cursor.advance();
                return ScanMode::Normal;
            }
            self.previous_whitespace = false;
        }

        let pos = self.cursor.pos();

        if self.delimiters.opens_identifier(b) {
            self.scope_start = pos;
            self.output.push(char::from(self.delimiters.identifier));
            self.cursor.advance();
            return ScanMode::Identifier { delimiter: b };
        }

        if self.delimiters.opens_string(b) {
            self.scope_start = pos;
            self.cursor.advance();
            return ScanMode::StringLiteral { delimiter: b };
        }

        match b {
            b'-' if self.cursor.peek() == b'-' && matches!(self.cursor.peek2(), b' ' | b'\t') => {
                self.cursor.advance_n(3);
                ScanMode::LineComment
            }
            b'/' if self.cursor.peek() == b'*' => {
                self.scope_start = pos;
                self.cursor.advance_n(2);
                ScanMode::BlockComment
            }
            b'-' => {
                if let Some(digit) = sign::folded_digit(self.source, pos) {
                    self.cursor.advance_to(digit);
                    ScanMode::Number
                } else {
                    self.output.push('-');
                    self.cursor.advance();
                    ScanMode::Normal
                }
            }
            _ if is_digit(b) => ScanMode::Number,
            _ if is_name_start(b) => {
                self.output.push(char::from(b));
                self.cursor.advance();
                ScanMode::Name
            }
            _ if is_line_whitespace(b) => {
                self.output.push(' ');
                self.cursor.advance();
                ScanMode::Normal
            }
            _ => {
                self.cursor.advance_char();
                self.output.push_str(self.cursor.slice_from(pos));
                ScanMode::Normal
            }
        }
    }
}
