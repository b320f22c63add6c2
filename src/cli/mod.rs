//! CLI argument parsing for gradebook
//!
//! Supports global flags: --root, --store, --format, --quiet, --verbose

pub mod args;
pub mod catalog;
pub mod commands;
pub mod format;
pub mod parse;
pub mod paths;

use clap::Parser;
use std::path::PathBuf;

pub use catalog::{
    AssignmentCommands, CategoryCommands, ClassCommands, CourseCommands, DepartmentCommands,
};
pub use commands::Commands;
pub use gradebook_core::format::OutputFormat;

/// Gradebook - course grades and GPA from the command line
#[derive(Parser, Debug)]
#[command(name = "gradebook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory for resolving the store
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Explicit store root path
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse::parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (e.g. debug, gradebook_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
