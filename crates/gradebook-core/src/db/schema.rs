//! SQLite database schema for gradebook

use rusqlite::{Connection, OptionalExtension, Result};

pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// State of the schema after [`create_schema`]
#[derive(Debug, PartialEq, Eq)]
pub enum SchemaStatus {
    /// Fresh database, tables created
    Created,
    /// Schema already at the current version
    Current,
    /// Database carries a schema version this build does not understand
    Unsupported(i32),
}

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS meta (
    key TEXT PRIMARY KEY,
    value TEXT
);

CREATE TABLE IF NOT EXISTS departments (
    subject TEXT PRIMARY KEY,
    name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS courses (
    id INTEGER PRIMARY KEY,
    subject TEXT NOT NULL REFERENCES departments(subject),
    number INTEGER NOT NULL,
    name TEXT NOT NULL,
    UNIQUE (subject, number)
);

CREATE TABLE IF NOT EXISTS classes (
    id INTEGER PRIMARY KEY,
    course_id INTEGER NOT NULL REFERENCES courses(id),
    season TEXT NOT NULL CHECK (season IN ('Spring', 'Summer', 'Fall')),
    year INTEGER NOT NULL,
    location TEXT NOT NULL DEFAULT '',
    professor TEXT,
    UNIQUE (course_id, season, year)
);

CREATE TABLE IF NOT EXISTS categories (
    id INTEGER PRIMARY KEY,
    class_id INTEGER NOT NULL REFERENCES classes(id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    weight INTEGER NOT NULL CHECK (weight >= 0),
    UNIQUE (class_id, name)
);
CREATE INDEX IF NOT EXISTS idx_categories_class ON categories(class_id);

CREATE TABLE IF NOT EXISTS assignments (
    id INTEGER PRIMARY KEY,
    category_id INTEGER NOT NULL REFERENCES categories(id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    points INTEGER NOT NULL CHECK (points >= 0),
    due TEXT,
    contents TEXT NOT NULL DEFAULT '',
    UNIQUE (category_id, name)
);
CREATE INDEX IF NOT EXISTS idx_assignments_category ON assignments(category_id);

CREATE TABLE IF NOT EXISTS enrollments (
    student TEXT NOT NULL,
    class_id INTEGER NOT NULL REFERENCES classes(id) ON DELETE CASCADE,
    grade TEXT,
    PRIMARY KEY (student, class_id)
);
CREATE INDEX IF NOT EXISTS idx_enrollments_class ON enrollments(class_id);

CREATE TABLE IF NOT EXISTS submissions (
    student TEXT NOT NULL,
    assignment_id INTEGER NOT NULL REFERENCES assignments(id) ON DELETE CASCADE,
    score INTEGER NOT NULL DEFAULT 0 CHECK (score >= 0),
    time TEXT NOT NULL,
    contents TEXT,
    PRIMARY KEY (student, assignment_id)
);
"#;

/// Create the schema if needed and report the stored version.
pub fn create_schema(conn: &Connection) -> Result<SchemaStatus> {
    let has_meta: bool = conn.query_row(
        "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type = 'table' AND name = 'meta'",
        [],
        |r| r.get(0),
    )?;

    let current_version: Option<i32> = if has_meta {
        conn.query_row(
            "SELECT value FROM meta WHERE key = 'schema_version'",
            [],
            |r| r.get::<_, String>(0).map(|s| s.parse().unwrap_or(0)),
        )
        .optional()?
    } else {
        None
    };

    let status = match current_version {
        None => {
            conn.execute_batch(SCHEMA_SQL)?;
            conn.execute(
                "INSERT INTO meta (key, value) VALUES ('schema_version', ?1)",
                [&CURRENT_SCHEMA_VERSION.to_string()],
            )?;
            tracing::debug!(version = CURRENT_SCHEMA_VERSION, "database schema created");
            SchemaStatus::Created
        }
        Some(v) if v == CURRENT_SCHEMA_VERSION => SchemaStatus::Current,
        Some(v) => SchemaStatus::Unsupported(v),
    };

    Ok(status)
}
