//! Sign folding: deciding whether a `-` belongs to the number after it.
//!
//! `a = -1` and `a - 1` both contain a minus in front of a digit, but only
//! the first is a signed literal. The normalizer decides by looking at the
//! neighbouring non-whitespace bytes of the *input*:
//!
//! - ahead of the `-`, skipping whitespace, there must be a digit;
//! - behind it, skipping whitespace, there must be an operator byte (see
//!   [`is_operator`]) or a letter/underscore.
//!
//! When both hold the sign is absorbed into the literal's placeholder.
//! A letter or underscore behind the sign counts as context, so `a -1`
//! folds to `a ?`. A `-` at the very start of the query has nothing behind
//! it and is never folded.
//!
//! Both scans stop at the first non-whitespace byte, so their cost is
//! bounded by the surrounding whitespace run.

use crate::char_class::{is_digit, is_name_start, is_operator, is_whitespace};

/// Position of the first digit after the `-` at `minus`, skipping
/// whitespace. `None` if the next non-whitespace byte is not a digit or the
/// input ends first.
pub fn digit_after_sign(source: &[u8], minus: usize) -> Option<usize> {
    let offset = source
        .get(minus + 1..)?
        .iter()
        .position(|&b| !is_whitespace(b))?;
    let pos = minus + 1 + offset;
    is_digit(source[pos]).then_some(pos)
}

/// The nearest non-whitespace byte before `pos`.
pub fn byte_before(source: &[u8], pos: usize) -> Option<u8> {
    source
        .get(..pos)?
        .iter()
        .rev()
        .copied()
        .find(|&b| !is_whitespace(b))
}

/// Returns `true` if the token before the `-` at `minus` makes it a sign.
pub fn has_sign_context(source: &[u8], minus: usize) -> bool {
    byte_before(source, minus).is_some_and(|b| is_operator(b) || is_name_start(b))
}

/// Position of the digit that the `-` at `minus` folds into, if it is a
/// sign.
///
/// The caller discards everything from `minus` up to the returned position
/// and scans a number from there.
pub fn folded_digit(source: &[u8], minus: usize) -> Option<usize> {
    debug_assert_eq!(source.get(minus), Some(&b'-'));
    let digit = digit_after_sign(source, minus)?;
    has_sign_context(source, minus).then_some(digit)
}

#[cfg(test)]
mod tests;
