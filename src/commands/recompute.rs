//! `gradebook recompute` command
//!
//! Needed after adding assignments or categories, which do not trigger a
//! recomputation on their own.

use serde_json::json;

use crate::cli::Cli;
use crate::commands::format::grade::{
    outcome_json, outcome_status, print_outcome_human, print_outcome_records,
};
use crate::commands::format::{output_by_format_result, print_records_header};
use gradebook_core::db::ClassKey;
use gradebook_core::error::Result;
use gradebook_core::store::Store;

/// Recompute one student's grade
pub fn execute_student(cli: &Cli, store: &Store, key: &ClassKey, student: &str) -> Result<()> {
    let outcome = store.db().recompute_grade(key, student)?;
    tracing::debug!(student, status = outcome_status(&outcome), "recompute finished");

    output_by_format_result!(cli.format,
        json => {
            let output = outcome_json(key, student, &outcome);
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        },
        human => {
            print_outcome_human(key, student, &outcome);
        },
        records => {
            print_records_header("recompute", &[("student", student)]);
            print_outcome_records(key, student, &outcome);
        }
    )
}

/// Recompute every enrolled student's grade
pub fn execute_class(cli: &Cli, store: &Store, key: &ClassKey) -> Result<()> {
    let outcomes = store.db().recompute_class(key)?;

    output_by_format_result!(cli.format,
        json => {
            let results: Vec<_> = outcomes
                .iter()
                .map(|(student, outcome)| outcome_json(key, student, outcome))
                .collect();
            let output = json!({
                "class": key,
                "count": outcomes.len(),
                "results": results,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        },
        human => {
            if outcomes.is_empty() && !cli.quiet {
                println!("No students enrolled in {}", key);
            }
            for (student, outcome) in &outcomes {
                print_outcome_human(key, student, outcome);
            }
        },
        records => {
            let count = outcomes.len().to_string();
            print_records_header("recompute", &[("count", &count)]);
            for (student, outcome) in &outcomes {
                print_outcome_records(key, student, outcome);
            }
        }
    )
}
