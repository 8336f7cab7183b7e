//! Sentinel-terminated query buffer.
//!
//! The buffer guarantees a `0x00` sentinel byte after the query text, so the
//! scanner can read the current byte and two bytes of lookahead at any
//! position up to and including end of input without a length check. The
//! total size is rounded up to the next 64-byte boundary.
//!
//! # Interior Null Bytes
//!
//! Queries may legitimately contain NUL bytes (inside binary string
//! literals, for instance). [`Cursor::is_eof`](crate::Cursor::is_eof)
//! tells them apart from the sentinel by position.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Bytes reserved past the source: the sentinel plus two bytes for `peek2()`
/// issued while the cursor sits on the sentinel.
const SENTINEL_RESERVE: usize = 3;

/// Sentinel-terminated query buffer.
///
/// # Layout
///
/// ```text
/// [query_bytes..., 0x00, padding_zeros...]
///  ^               ^     ^
///  0               |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer<'src> {
    /// The original query, kept for UTF-8 slicing.
    source: &'src str,
    /// Owned buffer: `[query_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
}

impl<'src> SourceBuffer<'src> {
    /// Copy `source` into a cache-line-aligned buffer with a `0x00`
    /// sentinel appended.
    pub fn new(source: &'src str) -> Self {
        let source_bytes = source.as_bytes();
        let source_len = source_bytes.len();

        let padded_len =
            (source_len + SENTINEL_RESERVE + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // The sentinel and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source_bytes);

        Self { source, buf }
    }

    /// The original query text.
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Returns the query bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source.len()]
    }

    /// Returns the full buffer including sentinel and padding.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source)
    }

    /// Length of the query in bytes.
    pub fn len(&self) -> usize {
        self.source.len()
    }

    /// Returns `true` if the query is empty.
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }
}
