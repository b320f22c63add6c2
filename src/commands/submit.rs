//! `gradebook submit` command

use chrono::Utc;
use serde_json::json;

use crate::cli::commands::SubmitArgs;
use crate::cli::Cli;
use crate::commands::format::{output_by_format_result, print_json_status, print_records_header};
use gradebook_core::error::Result;
use gradebook_core::store::Store;

pub fn execute(cli: &Cli, store: &Store, args: &SubmitArgs) -> Result<()> {
    let key = args.class.key();
    let time = Utc::now();
    store.db().submit_text(
        &key,
        &args.category,
        &args.assignment,
        &args.student,
        &args.contents,
        time,
    )?;

    output_by_format_result!(cli.format,
        json => print_json_status(
            "submitted",
            None,
            &[
                ("class", json!(key)),
                ("category", json!(args.category)),
                ("assignment", json!(args.assignment)),
                ("student", json!(args.student)),
                ("time", json!(time.to_rfc3339())),
            ],
        ),
        human => {
            if !cli.quiet {
                println!("Submitted {} for {}", args.assignment, args.student);
            }
        },
        records => {
            print_records_header(
                "submit",
                &[("student", &args.student), ("status", "submitted")],
            );
        }
    )
}
