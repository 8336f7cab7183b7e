//! Normalization runs over already-loaded input.
//!
//! Output goes to `out`, per-query failures to `err`. Each function returns
//! whether every query normalized.

use std::io::{self, Write};

use rustc_hash::FxHashMap;
use unparam::{normalize, NormalizeError, Options};

use crate::args::Mode;

/// Normalize `input` according to `mode`.
pub fn run_mode(
    mode: Mode,
    input: &str,
    options: &Options,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<bool> {
    match mode {
        Mode::Whole => whole(input, options, out, err),
        Mode::Lines => lines(input, options, out, err),
        Mode::Count => count(input, options, out, err),
    }
}

fn whole(
    input: &str,
    options: &Options,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<bool> {
    match normalize(input, options) {
        Ok(normalized) => {
            writeln!(out, "{normalized}")?;
            Ok(true)
        }
        Err(error) => {
            writeln!(err, "error: {}", describe(&error))?;
            Ok(false)
        }
    }
}

fn lines(
    input: &str,
    options: &Options,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<bool> {
    let mut ok = true;
    for (line_number, query) in queries(input) {
        match normalize(query, options) {
            Ok(normalized) => writeln!(out, "{normalized}")?,
            Err(error) => {
                writeln!(err, "line {line_number}: {}", describe(&error))?;
                ok = false;
            }
        }
    }
    Ok(ok)
}

fn count(
    input: &str,
    options: &Options,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<bool> {
    let mut ok = true;
    let mut counts: FxHashMap<String, usize> = FxHashMap::default();
    for (line_number, query) in queries(input) {
        match normalize(query, options) {
            Ok(normalized) => *counts.entry(normalized).or_default() += 1,
            Err(error) => {
                writeln!(err, "line {line_number}: {}", describe(&error))?;
                ok = false;
            }
        }
    }

    for (query, occurrences) in ranked(counts) {
        writeln!(out, "{occurrences}\t{query}")?;
    }
    Ok(ok)
}

/// Most frequent first, ties broken by query text.
fn ranked(counts: FxHashMap<String, usize>) -> Vec<(String, usize)> {
    let mut ranked: Vec<_> = counts.into_iter().collect();
    ranked.sort_unstable_by(|(a_query, a_count), (b_query, b_count)| {
        b_count.cmp(a_count).then_with(|| a_query.cmp(b_query))
    });
    ranked
}

/// Non-blank lines with their 1-based line numbers.
fn queries(input: &str) -> impl Iterator<Item = (usize, &str)> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| (index + 1, line))
}

/// Short form of an error for the terminal.
///
/// The full query is already in the log record when error logging is on.
fn describe(error: &NormalizeError) -> String {
    match error {
        NormalizeError::Syntax(syntax) => format!("{} (at byte {})", syntax.kind, syntax.offset),
        other => other.to_string(),
    }
}
