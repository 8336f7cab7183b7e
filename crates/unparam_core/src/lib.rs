//! Low-level scanning primitives for SQL normalization.
//!
//! This crate has no knowledge of placeholders, options, or output
//! formatting. It provides:
//!
//! - [`SourceBuffer`]: the query bytes followed by a `0x00` sentinel
//! - [`Cursor`]: a byte cursor over that buffer with bounded lookahead and
//!   `memchr`-accelerated skipping for strings, identifiers and comments
//! - [`char_class`]: ASCII-only byte predicates
//! - [`sign`]: pure lookahead/lookbehind helpers deciding whether a `-`
//!   belongs to the numeric literal that follows it
//!
//! The normalizer state machine lives in the `unparam` crate.

pub mod char_class;
mod cursor;
pub mod sign;
mod source_buffer;

pub use cursor::Cursor;
pub use source_buffer::SourceBuffer;
