//! `gradebook classes` command - a student's enrollments and grades

use serde_json::json;

use crate::cli::Cli;
use crate::commands::format::{output_by_format_result, print_records_header};
use gradebook_core::error::Result;
use gradebook_core::format::escape_quotes;
use gradebook_core::store::Store;

pub fn execute(cli: &Cli, store: &Store, student: &str) -> Result<()> {
    let classes = store.db().student_classes(student)?;
    let config = store.config();

    output_by_format_result!(cli.format,
        json => {
            let entries: Vec<_> = classes
                .iter()
                .map(|c| {
                    json!({
                        "subject": c.key.subject,
                        "number": c.key.number,
                        "season": c.key.season,
                        "year": c.key.year,
                        "name": c.name,
                        "grade": config.display_grade(c.grade.as_deref()),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
            Ok(())
        },
        human => {
            if classes.is_empty() {
                if !cli.quiet {
                    println!("{} is not enrolled in any classes", student);
                }
            } else {
                for c in &classes {
                    println!(
                        "{:<24} {:<32} {}",
                        c.key.to_string(),
                        c.name,
                        config.display_grade(c.grade.as_deref())
                    );
                }
            }
        },
        records => {
            let count = classes.len().to_string();
            print_records_header("classes", &[("student", student), ("count", &count)]);
            for c in &classes {
                println!(
                    "E class=\"{}\" name=\"{}\" grade={}",
                    escape_quotes(&c.key.to_string()),
                    escape_quotes(&c.name),
                    config.display_grade(c.grade.as_deref())
                );
            }
        }
    )
}
