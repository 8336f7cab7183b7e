//! Byte cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer byte-by-byte. EOF is detected
//! when the current byte equals the sentinel (`0x00`) and the position
//! has reached or exceeded the source length. Reads up to two bytes past
//! EOF are always in bounds thanks to the sentinel reserve.
//!
//! Bodies that the normalizer skips in bulk (string literals, quoted
//! identifiers, comments) are searched with `memchr` rather than stepped
//! through byte by byte.

/// Byte cursor over a sentinel-terminated buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], so a caller can snapshot it before a speculative
/// scan.
///
/// # Invariant
///
/// `buf[source.len()]` is the `0x00` sentinel and at least two more zero
/// bytes follow it. This is guaranteed by
/// [`SourceBuffer`](crate::SourceBuffer) construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// The source text, for UTF-8 slicing.
    source: &'a str,
    /// Current read position (byte index into `buf`).
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    pub(crate) fn new(buf: &'a [u8], source: &'a str) -> Self {
        debug_assert!(
            source.len() + 2 < buf.len(),
            "sentinel reserve must be within buffer bounds"
        );
        debug_assert!(buf[source.len()] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            source,
            pos: 0,
        }
    }

    /// Returns the byte at the current position (`0x00` at EOF).
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos]
    }

    /// Returns the byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos + 1]
    }

    /// Returns the byte two positions ahead of current.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.buf[self.pos + 2]
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    /// Jump forward to `pos`. The cursor never moves backwards.
    #[inline]
    pub fn advance_to(&mut self, pos: usize) {
        debug_assert!(pos >= self.pos, "cursor cannot rewind from {} to {pos}", self.pos);
        self.pos = pos.max(self.pos);
    }

    /// Returns `true` if the cursor has reached EOF.
    ///
    /// A `0x00` before the end of the source is an interior null, not EOF.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current() == 0 && self.pos >= self.source.len()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Length of the source content (excludes sentinel and padding).
    #[inline]
    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    /// Extract a source substring as `&str`.
    ///
    /// `end` is clamped to the source length. Boundaries produced by the
    /// scanner always fall on ASCII bytes or whole UTF-8 characters; an
    /// invalid range yields the empty string.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        let end = end.min(self.source.len());
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        self.source.get(start..end).unwrap_or_default()
    }

    /// Extract a source substring from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false`, so the sentinel terminates the loop.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.buf[self.pos]) {
            self.pos += 1;
        }
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    #[inline]
    pub fn utf8_char_width(byte: u8) -> usize {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance the cursor past one full UTF-8 character.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.advance_n(width);
    }

    /// The unscanned remainder of the source.
    fn remaining(&self) -> &'a [u8] {
        let len = self.source.len();
        &self.buf[self.pos.min(len)..len]
    }

    /// Advance to the next `\r` or `\n`, or to EOF if there is none.
    ///
    /// The line terminator itself is not consumed.
    pub fn eat_until_line_end(&mut self) {
        match memchr::memchr2(b'\r', b'\n', self.remaining()) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.source.len(),
        }
    }

    /// Advance to the next `delimiter` or backslash inside a string literal.
    ///
    /// Returns the byte found, or 0 for EOF.
    pub fn skip_to_string_delim(&mut self, delimiter: u8) -> u8 {
        if let Some(offset) = memchr::memchr2(delimiter, b'\\', self.remaining()) {
            self.pos += offset;
            self.buf[self.pos]
        } else {
            self.pos = self.source.len();
            0
        }
    }

    /// Advance until `byte` is found or EOF is reached.
    ///
    /// Returns `true` if the byte was found; the cursor then sits on it.
    pub fn eat_until(&mut self, byte: u8) -> bool {
        if let Some(offset) = memchr::memchr(byte, self.remaining()) {
            self.pos += offset;
            true
        } else {
            self.pos = self.source.len();
            false
        }
    }

    /// Advance past the next `*/`, or to EOF if there is none.
    ///
    /// Returns `true` if the terminator was found and consumed.
    pub fn eat_past_block_comment_end(&mut self) -> bool {
        if let Some(offset) = memchr::memmem::find(self.remaining(), b"*/") {
            self.pos += offset + 2;
            true
        } else {
            self.pos = self.source.len();
            false
        }
    }
}
