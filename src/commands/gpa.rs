//! `gradebook gpa` command

use serde_json::json;

use crate::cli::Cli;
use crate::commands::format::{output_by_format_result, print_records_header};
use gradebook_core::error::Result;
use gradebook_core::store::Store;

pub fn execute(cli: &Cli, store: &Store, student: &str) -> Result<()> {
    let summary = store.db().compute_gpa(student)?;
    let decimals = store.config().display.gpa_decimals;

    output_by_format_result!(cli.format,
        json => {
            let output = json!({
                "student": student,
                "gpa": summary.gpa,
                "counted": summary.counted,
                "excluded": summary.excluded,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        },
        human => {
            println!(
                "GPA for {}: {:.*} ({} graded, {} ungraded)",
                student, decimals, summary.gpa, summary.counted, summary.excluded
            );
        },
        records => {
            let gpa = format!("{:.*}", decimals, summary.gpa);
            let counted = summary.counted.to_string();
            let excluded = summary.excluded.to_string();
            print_records_header(
                "gpa",
                &[
                    ("student", student),
                    ("gpa", &gpa),
                    ("counted", &counted),
                    ("excluded", &excluded),
                ],
            );
        }
    )
}
