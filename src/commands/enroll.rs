//! `gradebook enroll` command

use serde_json::json;

use crate::cli::commands::EnrollArgs;
use crate::cli::Cli;
use crate::commands::format::{output_by_format_result, print_json_status, print_records_header};
use gradebook_core::error::Result;
use gradebook_core::format::escape_quotes;
use gradebook_core::store::Store;

pub fn execute(cli: &Cli, store: &Store, args: &EnrollArgs) -> Result<()> {
    let key = args.class.key();
    store.db().enroll(&key, &args.student)?;

    output_by_format_result!(cli.format,
        json => print_json_status(
            "enrolled",
            None,
            &[("class", json!(key)), ("student", json!(args.student))],
        ),
        human => {
            if !cli.quiet {
                println!("Enrolled {} in {}", args.student, key);
            }
        },
        records => {
            let class = format!("\"{}\"", escape_quotes(&key.to_string()));
            print_records_header(
                "enroll",
                &[("class", &class), ("student", &args.student), ("status", "enrolled")],
            );
        }
    )
}
