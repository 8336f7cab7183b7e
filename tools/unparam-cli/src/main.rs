//! `unparam`: normalize SQL from a file or standard input.

mod args;
mod run;

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use thiserror::Error;
use unparam::Options;

use args::{parse_args, print_usage, Command, Input, RunArgs};

#[derive(Debug, Error)]
enum CliError {
    #[error("cannot read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("cannot read standard input: {0}")]
    Stdin(#[source] io::Error),
    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("cannot write output: {0}")]
    Write(#[source] io::Error),
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let run_args = match parse_args(&args) {
        Ok(Command::Help) => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        Ok(Command::Run(run_args)) => run_args,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("Run `unparam --help` for usage.");
            return ExitCode::from(2);
        }
    };

    match execute(&run_args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn execute(run_args: &RunArgs) -> Result<bool, CliError> {
    let base = match &run_args.config {
        Some(path) => load_config(path)?,
        None => Options::default(),
    };
    let options = run_args.overrides.apply(base);
    tracing::debug!(?options, mode = ?run_args.mode, "resolved options");

    let input = read_input(&run_args.input)?;
    let stdout = io::stdout();
    let stderr = io::stderr();
    run::run_mode(
        run_args.mode,
        &input,
        &options,
        &mut stdout.lock(),
        &mut stderr.lock(),
    )
    .map_err(CliError::Write)
}

fn load_config(path: &Path) -> Result<Options, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::Config {
        path: path.to_path_buf(),
        source,
    })
}

fn read_input(input: &Input) -> Result<String, CliError> {
    match input {
        Input::Stdin => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(CliError::Stdin)?;
            Ok(text)
        }
        Input::File(path) => std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.clone(),
            source,
        }),
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
///
/// Syntax errors logged by the library show up at the default level.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .with(filter)
        .init();
}
