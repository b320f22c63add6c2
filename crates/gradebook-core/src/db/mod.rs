//! SQLite database module for gradebook
//!
//! Hosts the roster tables and implements the engine's collaborator traits
//! over them (see [`SqliteRoster`]).

mod catalog;
mod enrollments;
mod roster;
mod schema;

use std::path::Path;

use rusqlite::Connection;

use crate::error::{GradebookError, Result};
use crate::map_db_err;

pub use catalog::{ClassKey, NewAssignment, SEASONS};
pub use enrollments::{EnrolledClass, StudentAssignment};
pub use roster::SqliteRoster;
pub use schema::{create_schema, SchemaStatus, CURRENT_SCHEMA_VERSION};

/// Database file name inside the store root
pub const DB_FILE: &str = "gradebook.db";

/// SQLite database for gradebook
#[derive(Debug)]
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create the database at the given store root
    #[tracing::instrument(skip(store_root), fields(path = %store_root.display()))]
    pub fn open(store_root: &Path) -> Result<Self> {
        let db_path = store_root.join(DB_FILE);

        let conn = Connection::open(&db_path).map_err(|e| {
            GradebookError::Other(format!(
                "failed to open database at {}: {}",
                db_path.display(),
                e
            ))
        })?;

        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| GradebookError::Other(format!("failed to enable WAL mode: {}", e)))?;

        Self::from_connection(conn)
    }

    /// Wrap an already open connection, creating the schema if needed
    pub fn from_connection(conn: Connection) -> Result<Self> {
        conn.pragma_update(None, "foreign_keys", "ON")
            .map_err(|e| map_db_err!("enable foreign keys", e))?;

        match create_schema(&conn).map_err(|e| map_db_err!("create database schema", e))? {
            SchemaStatus::Created | SchemaStatus::Current => {}
            SchemaStatus::Unsupported(version) => {
                return Err(GradebookError::InvalidStore {
                    reason: format!(
                        "database schema version {} is not supported (expected {})",
                        version, CURRENT_SCHEMA_VERSION
                    ),
                });
            }
        }

        Ok(Database { conn })
    }

    /// Roster reader and grade writer over this database
    pub fn roster(&self) -> SqliteRoster<'_> {
        SqliteRoster::new(&self.conn)
    }

    pub fn get_schema_version(&self) -> Result<i32> {
        self.conn
            .query_row(
                "SELECT value FROM meta WHERE key = 'schema_version'",
                [],
                |r| {
                    let s: String = r.get(0)?;
                    Ok(s.parse().unwrap_or(0))
                },
            )
            .map_err(|e| map_db_err!("get schema version", e))
    }
}

impl Drop for Database {
    fn drop(&mut self) {
        // Checkpoint WAL so the next process sees a single file
        let _ = self.conn.pragma_update(None, "wal_checkpoint", "TRUNCATE");
    }
}
