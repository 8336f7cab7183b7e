//! ASCII byte classes used by the scanner.
//!
//! Classification is deliberately byte-based and locale-free: a non-ASCII
//! letter never starts a name and a non-ASCII digit never starts a number.

/// `[A-Za-z_]`: the first byte of a bare name.
#[inline]
pub fn is_name_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// `[A-Za-z0-9_]`: a byte continuing a bare name.
#[inline]
pub fn is_name_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// `[0-9]`
#[inline]
pub fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// `[0-9A-Fa-f.x]`: a byte continuing a numeric literal.
///
/// Covers decimal (`12.5`), hex (`0xAFe0`) and the mantissa/exponent
/// letters of scientific notation (`1e5`). The exponent's `-` is handled by
/// the caller since it is only valid right after `e`/`E`.
#[inline]
pub fn is_number_continue(b: u8) -> bool {
    b.is_ascii_hexdigit() || b == b'.' || b == b'x'
}

/// Whitespace that the normalizer collapses: space, tab, CR, LF.
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

/// Line-structure whitespace rendered as a single space in output.
#[inline]
pub fn is_line_whitespace(b: u8) -> bool {
    matches!(b, b'\t' | b'\r' | b'\n')
}

/// An operator byte after which a `-` is a unary sign.
///
/// The two-byte operators `>>`, `<<`, `<>` and `!=` all end in a byte of
/// this set, so matching on the last byte covers them.
#[inline]
pub fn is_operator(b: u8) -> bool {
    matches!(
        b,
        b'<' | b'>' | b'=' | b'+' | b'-' | b'/' | b'*' | b'%' | b'&' | b'~' | b'|' | b'^' | b'('
            | b','
    )
}
