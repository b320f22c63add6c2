//! `gradebook init` command - create a new store
//!
//! Idempotent: an existing store keeps its config and data.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::commands::format::{output_by_format_result, print_json_status, print_records_header};
use gradebook_core::error::Result;
use gradebook_core::store::Store;

/// Execute the init command
pub fn execute(cli: &Cli, root: &Path, store_path: Option<PathBuf>) -> Result<()> {
    let store = match store_path {
        Some(path) => Store::init_at(&path)?,
        None => Store::init(root)?,
    };
    let store_display = store.root().display().to_string();

    output_by_format_result!(cli.format,
        json => print_json_status(
            "ok",
            Some("Store initialized"),
            &[("store", serde_json::json!(store_display))],
        ),
        human => {
            if !cli.quiet {
                println!("Initialized gradebook store at {}", store_display);
            }
        },
        records => {
            print_records_header("init", &[("store", &store_display), ("status", "ok")]);
        }
    )
}
