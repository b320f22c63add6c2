//! `department`, `course`, `class`, `category` and `assignment` commands

use serde_json::json;

use crate::cli::{
    AssignmentCommands, CategoryCommands, Cli, ClassCommands, CourseCommands, DepartmentCommands,
};
use crate::commands::format::{output_by_format_result, print_json_status, print_records_header};
use gradebook_core::db::NewAssignment;
use gradebook_core::error::Result;
use gradebook_core::format::escape_quotes;
use gradebook_core::store::Store;

/// Report a created record in the requested format
fn report_created(cli: &Cli, kind: &str, label: &str, fields: &[(&str, serde_json::Value)]) -> Result<()> {
    let message = format!("Created {} {}", kind, label);
    output_by_format_result!(cli.format,
        json => {
            let mut extra = vec![("kind", json!(kind))];
            extra.extend(fields.iter().cloned());
            print_json_status("created", Some(&message), &extra)
        },
        human => {
            if !cli.quiet {
                println!("{}", message);
            }
        },
        records => {
            let quoted = format!("\"{}\"", escape_quotes(label));
            print_records_header(
                "create",
                &[("kind", kind), ("name", &quoted), ("status", "created")],
            );
        }
    )
}

pub fn execute_department(cli: &Cli, store: &Store, command: &DepartmentCommands) -> Result<()> {
    match command {
        DepartmentCommands::Add { subject, name } => {
            store.db().create_department(subject, name)?;
            report_created(
                cli,
                "department",
                subject,
                &[("subject", json!(subject)), ("name", json!(name))],
            )
        }
    }
}

pub fn execute_course(cli: &Cli, store: &Store, command: &CourseCommands) -> Result<()> {
    match command {
        CourseCommands::Add {
            subject,
            number,
            name,
        } => {
            store.db().create_course(subject, *number, name)?;
            report_created(
                cli,
                "course",
                &format!("{} {}", subject, number),
                &[
                    ("subject", json!(subject)),
                    ("number", json!(number)),
                    ("name", json!(name)),
                ],
            )
        }
    }
}

pub fn execute_class(cli: &Cli, store: &Store, command: &ClassCommands) -> Result<()> {
    match command {
        ClassCommands::Add {
            class,
            location,
            professor,
        } => {
            let key = class.key();
            let id = store
                .db()
                .create_class(&key, location, professor.as_deref())?;
            report_created(
                cli,
                "class",
                &key.to_string(),
                &[("class", json!(key)), ("id", json!(id))],
            )
        }
    }
}

pub fn execute_category(cli: &Cli, store: &Store, command: &CategoryCommands) -> Result<()> {
    match command {
        CategoryCommands::Add {
            class,
            name,
            weight,
        } => {
            let key = class.key();
            store.db().create_category(&key, name, *weight)?;
            report_created(
                cli,
                "category",
                name,
                &[
                    ("class", json!(key)),
                    ("name", json!(name)),
                    ("weight", json!(weight)),
                ],
            )
        }
    }
}

pub fn execute_assignment(cli: &Cli, store: &Store, command: &AssignmentCommands) -> Result<()> {
    match command {
        AssignmentCommands::Add {
            class,
            category,
            name,
            points,
            due,
            contents,
        } => {
            let key = class.key();
            store.db().create_assignment(
                &key,
                category,
                &NewAssignment {
                    name,
                    points: *points,
                    due: *due,
                    contents,
                },
            )?;
            tracing::debug!(key = %key, category, name, "assignment added; stored grades not recomputed");
            report_created(
                cli,
                "assignment",
                name,
                &[
                    ("class", json!(key)),
                    ("category", json!(category)),
                    ("name", json!(name)),
                    ("points", json!(points)),
                    ("due", json!(due.map(|d| d.to_rfc3339()))),
                ],
            )
        }
    }
}
