//! Shared entry point for the augmentation binaries.
//!
//! Each binary is `<program> <input.json> <output.json>` and differs only in
//! the [`Augmentation`] it applies.

use std::path::PathBuf;
use std::process::ExitCode;

use augment_lib::{Augmentation, augment_file};
use clap::{CommandFactory, FromArgMatches, Parser};
use tracing::error;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
struct Args {
    /// OpenAPI document (JSON) to read
    input: PathBuf,

    /// Path the augmented document is written to
    output: PathBuf,
}

/// Parses the command line, applies `augmentation` and reports the outcome
/// as an exit code.
///
/// Usage errors print to stderr and exit 1; `--help` exits 0.
pub fn run(name: &'static str, about: &'static str, augmentation: Augmentation) -> ExitCode {
    let args = match parse_args(name, about) {
        Ok(args) => args,
        Err(err) => {
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    init_tracing();

    match augment_file(&args.input, &args.output, augmentation) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "augmentation failed");
            eprintln!("{name}: {err}");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(name: &'static str, about: &'static str) -> Result<Args, clap::Error> {
    let mut command = Args::command().name(name).bin_name(name).about(about);
    let matches = command.try_get_matches_from_mut(std::env::args_os())?;
    Args::from_arg_matches(&matches).map_err(|err| err.format(&mut command))
}

/// Installs a compact stderr subscriber filtered by `RUST_LOG`, defaulting
/// to `info`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}
