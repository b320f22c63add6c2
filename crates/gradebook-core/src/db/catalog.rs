//! Departments, courses, classes, categories and assignments

use std::fmt;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use serde::Serialize;

use super::Database;
use crate::error::{GradebookError, Result};
use crate::roster::{AssignmentId, CategoryId, ClassId};
use crate::{bail_invalid, map_db_err};

/// Terms a class can be offered in
pub const SEASONS: [&str; 3] = ["Spring", "Summer", "Fall"];

/// Natural key of a class: course plus term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassKey {
    pub subject: String,
    pub number: u32,
    pub season: String,
    pub year: u32,
}

impl ClassKey {
    pub fn new(subject: impl Into<String>, number: u32, season: impl Into<String>, year: u32) -> Self {
        Self {
            subject: subject.into(),
            number,
            season: season.into(),
            year,
        }
    }
}

impl fmt::Display for ClassKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.subject, self.number, self.season, self.year)
    }
}

/// A new assignment within a category
#[derive(Debug, Clone)]
pub struct NewAssignment<'a> {
    pub name: &'a str,
    pub points: u32,
    pub due: Option<DateTime<Utc>>,
    pub contents: &'a str,
}

pub(super) fn class_id(conn: &Connection, key: &ClassKey) -> Result<Option<ClassId>> {
    conn.query_row(
        "SELECT cl.id FROM classes cl
         JOIN courses co ON co.id = cl.course_id
         WHERE co.subject = ?1 AND co.number = ?2 AND cl.season = ?3 AND cl.year = ?4",
        params![key.subject, key.number, key.season, key.year],
        |r| r.get(0).map(ClassId),
    )
    .optional()
    .map_err(|e| map_db_err!("resolve class", e))
}

pub(super) fn require_class(conn: &Connection, key: &ClassKey) -> Result<ClassId> {
    class_id(conn, key)?.ok_or_else(|| GradebookError::not_found("class", key))
}

pub(super) fn require_category(conn: &Connection, class: ClassId, name: &str) -> Result<CategoryId> {
    conn.query_row(
        "SELECT id FROM categories WHERE class_id = ?1 AND name = ?2",
        params![class.0, name],
        |r| r.get(0).map(CategoryId),
    )
    .optional()
    .map_err(|e| map_db_err!("resolve category", e))?
    .ok_or_else(|| GradebookError::not_found("category", name))
}

pub(super) fn require_assignment(
    conn: &Connection,
    category: CategoryId,
    name: &str,
) -> Result<AssignmentId> {
    conn.query_row(
        "SELECT id FROM assignments WHERE category_id = ?1 AND name = ?2",
        params![category.0, name],
        |r| r.get(0).map(AssignmentId),
    )
    .optional()
    .map_err(|e| map_db_err!("resolve assignment", e))?
    .ok_or_else(|| GradebookError::not_found("assignment", name))
}

fn exists(conn: &Connection, sql: &str, params: impl rusqlite::Params) -> Result<bool> {
    conn.query_row(sql, params, |r| r.get(0))
        .map_err(|e| map_db_err!("check existence", e))
}

impl Database {
    pub fn create_department(&self, subject: &str, name: &str) -> Result<()> {
        if subject.trim().is_empty() {
            bail_invalid!("subject", "(empty)");
        }
        if exists(
            &self.conn,
            "SELECT COUNT(*) > 0 FROM departments WHERE subject = ?1",
            [subject],
        )? {
            return Err(GradebookError::already_exists("department", subject));
        }

        self.conn
            .execute(
                "INSERT INTO departments (subject, name) VALUES (?1, ?2)",
                params![subject, name],
            )
            .map_err(|e| map_db_err!("create department", e))?;
        tracing::debug!(subject, "department created");
        Ok(())
    }

    pub fn create_course(&self, subject: &str, number: u32, name: &str) -> Result<()> {
        if !exists(
            &self.conn,
            "SELECT COUNT(*) > 0 FROM departments WHERE subject = ?1",
            [subject],
        )? {
            return Err(GradebookError::not_found("department", subject));
        }
        if exists(
            &self.conn,
            "SELECT COUNT(*) > 0 FROM courses WHERE subject = ?1 AND number = ?2",
            params![subject, number],
        )? {
            return Err(GradebookError::already_exists(
                "course",
                format!("{subject} {number}"),
            ));
        }

        self.conn
            .execute(
                "INSERT INTO courses (subject, number, name) VALUES (?1, ?2, ?3)",
                params![subject, number, name],
            )
            .map_err(|e| map_db_err!("create course", e))?;
        tracing::debug!(subject, number, "course created");
        Ok(())
    }

    /// Offer a course in a term
    pub fn create_class(
        &self,
        key: &ClassKey,
        location: &str,
        professor: Option<&str>,
    ) -> Result<ClassId> {
        if !SEASONS.contains(&key.season.as_str()) {
            bail_invalid!("season", &key.season);
        }

        let course_id: i64 = self
            .conn
            .query_row(
                "SELECT id FROM courses WHERE subject = ?1 AND number = ?2",
                params![key.subject, key.number],
                |r| r.get(0),
            )
            .optional()
            .map_err(|e| map_db_err!("resolve course", e))?
            .ok_or_else(|| {
                GradebookError::not_found("course", format!("{} {}", key.subject, key.number))
            })?;

        if class_id(&self.conn, key)?.is_some() {
            return Err(GradebookError::already_exists("class", key));
        }

        self.conn
            .execute(
                "INSERT INTO classes (course_id, season, year, location, professor)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![course_id, key.season, key.year, location, professor],
            )
            .map_err(|e| map_db_err!("create class", e))?;

        let id = ClassId(self.conn.last_insert_rowid());
        tracing::debug!(class = %id, key = %key, "class created");
        Ok(id)
    }

    /// Look up a class by its natural key
    pub fn find_class(&self, key: &ClassKey) -> Result<Option<ClassId>> {
        class_id(&self.conn, key)
    }

    pub fn create_category(&self, key: &ClassKey, name: &str, weight: u32) -> Result<CategoryId> {
        let class = require_class(&self.conn, key)?;

        if exists(
            &self.conn,
            "SELECT COUNT(*) > 0 FROM categories WHERE class_id = ?1 AND name = ?2",
            params![class.0, name],
        )? {
            return Err(GradebookError::already_exists("category", name));
        }

        self.conn
            .execute(
                "INSERT INTO categories (class_id, name, weight) VALUES (?1, ?2, ?3)",
                params![class.0, name, weight],
            )
            .map_err(|e| map_db_err!("create category", e))?;
        Ok(CategoryId(self.conn.last_insert_rowid()))
    }

    /// Add an assignment to a category.
    ///
    /// Existing grades are not recomputed.
    pub fn create_assignment(
        &self,
        key: &ClassKey,
        category: &str,
        assignment: &NewAssignment<'_>,
    ) -> Result<AssignmentId> {
        let class = require_class(&self.conn, key)?;
        let category_id = require_category(&self.conn, class, category)?;

        if exists(
            &self.conn,
            "SELECT COUNT(*) > 0 FROM assignments WHERE category_id = ?1 AND name = ?2",
            params![category_id.0, assignment.name],
        )? {
            return Err(GradebookError::already_exists("assignment", assignment.name));
        }

        self.conn
            .execute(
                "INSERT INTO assignments (category_id, name, points, due, contents)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    category_id.0,
                    assignment.name,
                    assignment.points,
                    assignment.due.map(|d| d.to_rfc3339()),
                    assignment.contents
                ],
            )
            .map_err(|e| map_db_err!("create assignment", e))?;
        Ok(AssignmentId(self.conn.last_insert_rowid()))
    }
}
