//! Command-line argument parsing.
//!
//! Hand-rolled: every option is a `--flag` or `--flag=value` pair, and the
//! single positional argument names the input file.

use std::path::PathBuf;

use thiserror::Error;
use unparam::Options;

/// What the binary was asked to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Run(RunArgs),
}

/// Where the query text comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

/// How the input is split into queries and reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// The whole input is one query.
    Whole,
    /// Each non-empty line is a query.
    Lines,
    /// Each non-empty line is a query; identical results are counted.
    Count,
}

/// Flags that override values loaded from `--config`.
///
/// `None` leaves the configured value alone.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Overrides {
    pub ansi_double_quotes: Option<bool>,
    pub identifier_delimiter: Option<char>,
    pub strip_whitespace: Option<bool>,
    pub add_removed_string_quotes: Option<bool>,
    pub reduce_enums_to_one_element: Option<bool>,
    pub throw_on_syntax_error: Option<bool>,
    pub write_syntax_errors_to_console: Option<bool>,
}

impl Overrides {
    /// Apply every set flag on top of `options`.
    #[must_use]
    pub fn apply(&self, mut options: Options) -> Options {
        if let Some(value) = self.ansi_double_quotes {
            options.ansi_double_quotes = value;
        }
        if let Some(value) = self.identifier_delimiter {
            options.identifier_delimiter = value;
        }
        if let Some(value) = self.strip_whitespace {
            options.strip_whitespace = value;
        }
        if let Some(value) = self.add_removed_string_quotes {
            options.add_removed_string_quotes = value;
        }
        if let Some(value) = self.reduce_enums_to_one_element {
            options.reduce_enums_to_one_element = value;
        }
        if let Some(value) = self.throw_on_syntax_error {
            options.throw_on_syntax_error = value;
        }
        if let Some(value) = self.write_syntax_errors_to_console {
            options.write_syntax_errors_to_console = value;
        }
        options
    }
}

/// Parsed arguments for a normalization run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunArgs {
    pub config: Option<PathBuf>,
    pub overrides: Overrides,
    pub input: Input,
    pub mode: Mode,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArgError {
    #[error("unknown option `{0}`")]
    UnknownOption(String),
    #[error("option `{0}` requires a value")]
    MissingValue(&'static str),
    #[error("`--identifier-delimiter` takes exactly one character, got {0:?}")]
    InvalidDelimiter(String),
    #[error("unexpected argument `{0}`: only one input file is accepted")]
    ExtraInput(String),
}

/// Parse the arguments following the program name.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Command, ArgError> {
    let mut overrides = Overrides::default();
    let mut config = None;
    let mut input = None;
    let mut mode = Mode::Whole;

    for arg in args.iter().map(AsRef::as_ref) {
        match arg {
            "-h" | "--help" => return Ok(Command::Help),
            "--ansi" => overrides.ansi_double_quotes = Some(true),
            "--keep-whitespace" => overrides.strip_whitespace = Some(false),
            "--quote-strings" => overrides.add_removed_string_quotes = Some(true),
            "--reduce-enums" => overrides.reduce_enums_to_one_element = Some(true),
            "--no-throw" => overrides.throw_on_syntax_error = Some(false),
            "--quiet" => overrides.write_syntax_errors_to_console = Some(false),
            "--lines" => {
                if mode == Mode::Whole {
                    mode = Mode::Lines;
                }
            }
            "--count" => mode = Mode::Count,
            "--config" => return Err(ArgError::MissingValue("--config")),
            "--identifier-delimiter" => {
                return Err(ArgError::MissingValue("--identifier-delimiter"));
            }
            _ => {
                if let Some(path) = arg.strip_prefix("--config=") {
                    if path.is_empty() {
                        return Err(ArgError::MissingValue("--config"));
                    }
                    config = Some(PathBuf::from(path));
                } else if let Some(value) = arg.strip_prefix("--identifier-delimiter=") {
                    overrides.identifier_delimiter = Some(single_char(value)?);
                } else if arg.starts_with('-') && arg != "-" {
                    return Err(ArgError::UnknownOption(arg.to_owned()));
                } else if input.is_some() {
                    return Err(ArgError::ExtraInput(arg.to_owned()));
                } else if arg == "-" {
                    input = Some(Input::Stdin);
                } else {
                    input = Some(Input::File(PathBuf::from(arg)));
                }
            }
        }
    }

    Ok(Command::Run(RunArgs {
        config,
        overrides,
        input: input.unwrap_or(Input::Stdin),
        mode,
    }))
}

fn single_char(value: &str) -> Result<char, ArgError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ArgError::InvalidDelimiter(value.to_owned())),
    }
}

pub fn print_usage() {
    eprintln!("Usage: unparam [options] [FILE]");
    eprintln!();
    eprintln!("Normalize SQL: literals become placeholders, comments are removed.");
    eprintln!("Reads FILE, or standard input when FILE is absent or `-`.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config=<path>               Load options from a JSON file");
    eprintln!("  --ansi                        Treat \"...\" as identifiers, not strings");
    eprintln!("  --identifier-delimiter=<c>    Delimiter written around identifiers (default `)");
    eprintln!("  --keep-whitespace             Keep whitespace runs instead of collapsing them");
    eprintln!("  --quote-strings               Write string placeholders as '?'");
    eprintln!("  --reduce-enums                Collapse IN (?, ?, ...) and FIELD lists");
    eprintln!("  --no-throw                    Print syntax errors in place of the query");
    eprintln!("  --quiet                       Do not log syntax errors");
    eprintln!("  --lines                       Normalize each non-empty line separately");
    eprintln!("  --count                       Like --lines, then count identical queries");
    eprintln!("  -h, --help                    Show this message");
    eprintln!();
    eprintln!("Set RUST_LOG to adjust log output (default: warn).");
}
