//! Gradebook - course grade management CLI
//!
//! Records departments, courses, classes, weighted assignment categories and
//! scores, keeps each enrollment's letter grade current and reports GPA.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use gradebook_core::error::{ExitCode as GradebookExitCode, GradebookError};
use gradebook_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match parse_cli() {
        Ok(cli) => cli,
        Err(code) => return code,
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("warning: logging disabled: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => exit_with(GradebookExitCode::Success),
        Err(e) => {
            report_error(&cli, &e);
            exit_with(e.exit_code())
        }
    }
}

/// Parse argv, emitting a JSON error envelope when clap fails under
/// `--format json`. Help and version requests always go through clap.
fn parse_cli() -> Result<Cli, ExitCode> {
    let err = match Cli::try_parse() {
        Ok(cli) => return Ok(cli),
        Err(err) => err,
    };

    let informational = matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion);
    if informational || !wants_json(env::args().skip(1)) {
        err.exit();
    }

    let error = from_clap_error(&err);
    eprintln!("{}", error.to_json());
    Err(exit_with(error.exit_code()))
}

fn from_clap_error(err: &clap::Error) -> GradebookError {
    match err.kind() {
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::ArgumentConflict
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::MissingSubcommand => GradebookError::UsageError(err.to_string()),
        _ => GradebookError::Other(err.to_string()),
    }
}

fn report_error(cli: &Cli, error: &GradebookError) {
    match cli.format {
        OutputFormat::Json => eprintln!("{}", error.to_json()),
        _ if cli.quiet => {}
        _ => eprintln!("error: {}", error),
    }
}

fn exit_with(code: GradebookExitCode) -> ExitCode {
    ExitCode::from(code as u8)
}

/// Whether the raw arguments ask for JSON output.
///
/// Checked by hand because clap may fail before it reaches `--format`.
fn wants_json<I>(args: I) -> bool
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format=json" => return true,
            "--format" if args.next().as_deref() == Some("json") => return true,
            _ => {}
        }
    }
    false
}
