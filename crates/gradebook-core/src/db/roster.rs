use rusqlite::{params, Connection};

use crate::error::{GradebookError, Result};
use crate::grading::LetterGrade;
use crate::map_db_err;
use crate::roster::{
    AssignmentId, AssignmentRecord, CategoryId, CategoryRecord, ClassId, EnrollmentRecord,
    GradeWriter, RosterProvider,
};

/// Roster reader and grade writer over a SQLite connection.
///
/// Borrows the connection so it can run inside an open transaction.
#[derive(Debug, Clone, Copy)]
pub struct SqliteRoster<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteRoster<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }
}

impl RosterProvider for SqliteRoster<'_> {
    fn class_exists(&self, class: ClassId) -> Result<bool> {
        self.conn
            .query_row(
                "SELECT COUNT(*) > 0 FROM classes WHERE id = ?1",
                [class.0],
                |r| r.get(0),
            )
            .map_err(|e| map_db_err!("check class", e))
    }

    fn is_enrolled(&self, student: &str, class: ClassId) -> Result<bool> {
        self.conn
            .query_row(
                "SELECT COUNT(*) > 0 FROM enrollments WHERE student = ?1 AND class_id = ?2",
                params![student, class.0],
                |r| r.get(0),
            )
            .map_err(|e| map_db_err!("check enrollment", e))
    }

    fn categories(&self, class: ClassId) -> Result<Vec<CategoryRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, weight FROM categories WHERE class_id = ?1 ORDER BY id")
            .map_err(|e| map_db_err!("prepare categories query", e))?;

        let rows = stmt
            .query_map([class.0], |row| {
                Ok(CategoryRecord {
                    id: CategoryId(row.get(0)?),
                    name: row.get(1)?,
                    weight: row.get(2)?,
                })
            })
            .map_err(|e| map_db_err!("query categories", e))?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| map_db_err!("read categories", e))
    }

    fn assignments(&self, category: CategoryId) -> Result<Vec<AssignmentRecord>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, name, points FROM assignments WHERE category_id = ?1 ORDER BY id",
            )
            .map_err(|e| map_db_err!("prepare assignments query", e))?;

        let rows = stmt
            .query_map([category.0], |row| {
                Ok(AssignmentRecord {
                    id: AssignmentId(row.get(0)?),
                    name: row.get(1)?,
                    points: row.get(2)?,
                })
            })
            .map_err(|e| map_db_err!("query assignments", e))?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| map_db_err!("read assignments", e))
    }

    fn score(&self, student: &str, assignment: AssignmentId) -> Result<Option<u32>> {
        let mut stmt = self
            .conn
            .prepare("SELECT score FROM submissions WHERE student = ?1 AND assignment_id = ?2")
            .map_err(|e| map_db_err!("prepare score query", e))?;

        let mut rows = stmt
            .query(params![student, assignment.0])
            .map_err(|e| map_db_err!("query score", e))?;

        match rows.next().map_err(|e| map_db_err!("read score", e))? {
            Some(row) => Ok(Some(row.get(0).map_err(|e| map_db_err!("read score", e))?)),
            None => Ok(None),
        }
    }

    fn enrollments(&self, student: &str) -> Result<Vec<EnrollmentRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT class_id, grade FROM enrollments WHERE student = ?1 ORDER BY class_id")
            .map_err(|e| map_db_err!("prepare enrollments query", e))?;

        let rows = stmt
            .query_map([student], |row| {
                Ok(EnrollmentRecord {
                    class: ClassId(row.get(0)?),
                    grade: row.get(1)?,
                })
            })
            .map_err(|e| map_db_err!("query enrollments", e))?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| map_db_err!("read enrollments", e))
    }

    fn enrolled_students(&self, class: ClassId) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT student FROM enrollments WHERE class_id = ?1 ORDER BY student")
            .map_err(|e| map_db_err!("prepare roster query", e))?;

        let rows = stmt
            .query_map([class.0], |row| row.get(0))
            .map_err(|e| map_db_err!("query roster", e))?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| map_db_err!("read roster", e))
    }
}

impl GradeWriter for SqliteRoster<'_> {
    fn write_grade(&self, student: &str, class: ClassId, grade: LetterGrade) -> Result<()> {
        let updated = self
            .conn
            .execute(
                "UPDATE enrollments SET grade = ?1 WHERE student = ?2 AND class_id = ?3",
                params![grade.as_str(), student, class.0],
            )
            .map_err(|e| map_db_err!("write grade", e))?;

        if updated == 0 {
            return Err(GradebookError::not_found(
                "enrollment",
                format!("{student} in class {class}"),
            ));
        }
        Ok(())
    }
}
