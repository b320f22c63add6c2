//! `gradebook grade show` command
//!
//! Lists the student's scores and previews the grade they currently earn.
//! The stored grade is shown alongside and is not modified.

use serde_json::json;

use crate::cli::Cli;
use crate::commands::format::grade::{outcome_json, print_outcome_human, print_outcome_records};
use crate::commands::format::{output_by_format_result, print_records_header};
use gradebook_core::db::ClassKey;
use gradebook_core::error::Result;
use gradebook_core::format::escape_quotes;
use gradebook_core::store::Store;

pub fn execute_show(cli: &Cli, store: &Store, key: &ClassKey, student: &str) -> Result<()> {
    let db = store.db();
    let assignments = db.student_assignments(key, student)?;
    let preview = db.preview_grade(key, student)?;
    let stored = db
        .student_classes(student)?
        .into_iter()
        .find(|c| &c.key == key)
        .and_then(|c| c.grade);
    let stored_display = store.config().display_grade(stored.as_deref());

    output_by_format_result!(cli.format,
        json => {
            let mut output = outcome_json(key, student, &preview);
            output["stored_grade"] = json!(stored);
            output["assignments"] = json!(assignments);
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        },
        human => {
            for a in &assignments {
                let score = a.score.map_or_else(|| "-".to_string(), |s| s.to_string());
                println!("{:<16} {:<24} {:>5} / {}", a.category, a.name, score, a.points);
            }
            if !assignments.is_empty() {
                println!();
            }
            print_outcome_human(key, student, &preview);
            println!("Stored grade: {}", stored_display);
        },
        records => {
            print_records_header("grade.show", &[("student", student), ("stored", stored_display)]);
            print_outcome_records(key, student, &preview);
            for a in &assignments {
                let score = a.score.map_or_else(|| "-".to_string(), |s| s.to_string());
                println!(
                    "A category=\"{}\" name=\"{}\" points={} score={}",
                    escape_quotes(&a.category),
                    escape_quotes(&a.name),
                    a.points,
                    score
                );
            }
        }
    )
}
