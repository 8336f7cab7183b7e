//! Enum reduction: collapsing placeholder lists after normalization.
//!
//! `IN (?, ?, ?)` and `FIELD(col, ?, ?)` vary in length with the number of
//! values bound at runtime. This pass rewrites them to a single placeholder
//! so that those variants group together.
//!
//! It is a textual pass over already-normalized output, not a grammar-aware
//! transform. A list is only rewritten when every collapsed element is a
//! placeholder, so `IN (?, ?, column_name)` and lists holding subqueries are
//! left alone.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Two or more placeholders (`?` or `'?'`) separated by commas.
const PLACEHOLDER_LIST: &str = r"(?:'\?'|\?)(?:\s*,\s*(?:'\?'|\?))+";

/// `FIELD(first_arg, ?, ?, ...)`: group 1 keeps everything up to the
/// collapsed list, group 2 the closing parenthesis.
#[allow(
    clippy::expect_used,
    reason = "constant pattern, compilation is covered by tests"
)]
static FIELD_LIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)(\sfield\s*\(\s*[^,()]+?\s*,\s*){PLACEHOLDER_LIST}(\s*\))"
    ))
    .expect("FIELD list pattern compiles")
});

#[allow(
    clippy::expect_used,
    reason = "constant pattern, compilation is covered by tests"
)]
static BACKTICK_IN_LIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&in_list_pattern('`')).expect("IN list pattern compiles")
});

#[allow(
    clippy::expect_used,
    reason = "constant pattern, compilation is covered by tests"
)]
static DOUBLE_QUOTE_IN_LIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&in_list_pattern('"')).expect("IN list pattern compiles")
});

/// `IN (?, ?, ...)` preceded by whitespace or the identifier delimiter:
/// group 1 keeps the keyword and its opening parenthesis.
fn in_list_pattern(identifier_delimiter: char) -> String {
    let delimiter = regex::escape(identifier_delimiter.encode_utf8(&mut [0; 4]));
    format!(r"(?i)([\s{delimiter}]in\s*\()\s*{PLACEHOLDER_LIST}\s*\)")
}

/// The `IN` list pattern for the given output identifier delimiter.
fn in_list_regex(identifier_delimiter: char) -> Option<Cow<'static, Regex>> {
    match identifier_delimiter {
        '`' => Some(Cow::Borrowed(&*BACKTICK_IN_LIST)),
        '"' => Some(Cow::Borrowed(&*DOUBLE_QUOTE_IN_LIST)),
        other => Regex::new(&in_list_pattern(other)).ok().map(Cow::Owned),
    }
}

/// Collapse `IN (...)` and `FIELD(...)` placeholder lists in normalized
/// query text.
///
/// `identifier_delimiter` is the delimiter the normalizer wrote, since
/// `` `col`IN (?, ?) `` has no whitespace before the keyword.
pub fn collapse_enums(normalized: &str, identifier_delimiter: char) -> Cow<'_, str> {
    let after_in = match in_list_regex(identifier_delimiter) {
        Some(in_list) => match in_list.replace_all(normalized, "${1}?)") {
            Cow::Owned(rewritten) => Cow::Owned(rewritten),
            Cow::Borrowed(_) => Cow::Borrowed(normalized),
        },
        None => Cow::Borrowed(normalized),
    };

    let after_field = match FIELD_LIST.replace_all(&after_in, "${1}?${2}") {
        Cow::Owned(rewritten) => Some(rewritten),
        Cow::Borrowed(_) => None,
    };

    let collapsed = match after_field {
        Some(rewritten) => Cow::Owned(rewritten),
        None => after_in,
    };

    if let Cow::Owned(text) = &collapsed {
        tracing::trace!(collapsed = %text, "reduced enum lists");
    }
    collapsed
}
