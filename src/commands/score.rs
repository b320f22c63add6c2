//! `gradebook score` command - the grading event
//!
//! Stores the score and recomputes the student's grade in one transaction.

use serde_json::json;

use crate::cli::commands::ScoreArgs;
use crate::cli::Cli;
use crate::commands::format::grade::{outcome_json, print_outcome_human, print_outcome_records};
use crate::commands::format::{output_by_format_result, print_records_header};
use gradebook_core::error::Result;
use gradebook_core::store::Store;

pub fn execute(cli: &Cli, store: &Store, args: &ScoreArgs) -> Result<()> {
    let key = args.class.key();
    let outcome = store.db().grade_submission(
        &key,
        &args.category,
        &args.assignment,
        &args.student,
        args.score,
    )?;

    output_by_format_result!(cli.format,
        json => {
            let mut output = outcome_json(&key, &args.student, &outcome);
            output["assignment"] = json!(args.assignment);
            output["category"] = json!(args.category);
            output["score"] = json!(args.score);
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        },
        human => {
            if !cli.quiet {
                println!("Scored {} for {}: {}", args.assignment, args.student, args.score);
            }
            print_outcome_human(&key, &args.student, &outcome);
        },
        records => {
            let score = args.score.to_string();
            print_records_header("score", &[("student", &args.student), ("score", &score)]);
            print_outcome_records(&key, &args.student, &outcome);
        }
    )
}
