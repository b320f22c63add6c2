//! Enrollments, submissions and the grading events that touch them

use chrono::{DateTime, Utc};
use rusqlite::params;
use serde::Serialize;

use super::catalog::{class_id, require_assignment, require_category, require_class, ClassKey};
use super::{Database, SqliteRoster};
use crate::error::{GradebookError, Result};
use crate::grading::{GpaSummary, GradeEngine, Missing, RecomputeOutcome};
use crate::map_db_err;
use crate::roster::RosterProvider;

/// One class a student is enrolled in, with its stored grade
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrolledClass {
    #[serde(flatten)]
    pub key: ClassKey,
    pub name: String,
    /// Raw stored label; `None` until a grade is computed
    pub grade: Option<String>,
}

/// An assignment of a class together with one student's score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentAssignment {
    pub category: String,
    pub name: String,
    pub points: u32,
    pub due: Option<String>,
    /// `None` when the student has not submitted
    pub score: Option<u32>,
}

impl Database {
    /// Enroll a student; the grade starts unset
    pub fn enroll(&self, key: &ClassKey, student: &str) -> Result<()> {
        let class = require_class(&self.conn, key)?;

        let inserted = self
            .conn
            .execute(
                "INSERT OR IGNORE INTO enrollments (student, class_id, grade) VALUES (?1, ?2, NULL)",
                params![student, class.0],
            )
            .map_err(|e| map_db_err!("enroll student", e))?;

        if inserted == 0 {
            return Err(GradebookError::already_exists(
                "enrollment",
                format!("{student} in {key}"),
            ));
        }
        tracing::debug!(student, class = %class, "student enrolled");
        Ok(())
    }

    /// Submit or resubmit text for an assignment.
    ///
    /// A new submission starts with a score of 0; resubmitting replaces the
    /// contents and time but keeps the score.
    pub fn submit_text(
        &self,
        key: &ClassKey,
        category: &str,
        assignment: &str,
        student: &str,
        contents: &str,
        time: DateTime<Utc>,
    ) -> Result<()> {
        let class = require_class(&self.conn, key)?;
        if !self.roster().is_enrolled(student, class)? {
            return Err(GradebookError::not_found(
                "enrollment",
                format!("{student} in {key}"),
            ));
        }
        let category = require_category(&self.conn, class, category)?;
        let assignment = require_assignment(&self.conn, category, assignment)?;

        self.conn
            .execute(
                "INSERT INTO submissions (student, assignment_id, score, time, contents)
                 VALUES (?1, ?2, 0, ?3, ?4)
                 ON CONFLICT (student, assignment_id)
                 DO UPDATE SET contents = excluded.contents, time = excluded.time",
                params![student, assignment.0, time.to_rfc3339(), contents],
            )
            .map_err(|e| map_db_err!("save submission", e))?;
        Ok(())
    }

    /// Score a submission and recompute the student's grade.
    ///
    /// Creates the submission if the student has not submitted. The score
    /// write and the recomputation commit together. A student who is not
    /// enrolled gets no submission row and the outcome reports the missing
    /// enrollment.
    #[tracing::instrument(skip(self), fields(key = %key))]
    pub fn grade_submission(
        &self,
        key: &ClassKey,
        category: &str,
        assignment: &str,
        student: &str,
        score: u32,
    ) -> Result<RecomputeOutcome> {
        let tx = self
            .conn
            .unchecked_transaction()
            .map_err(|e| map_db_err!("begin transaction", e))?;

        let class = require_class(&tx, key)?;
        let category = require_category(&tx, class, category)?;
        let assignment = require_assignment(&tx, category, assignment)?;

        let roster = SqliteRoster::new(&tx);
        if !roster.is_enrolled(student, class)? {
            tracing::debug!(student, class = %class, "score ignored, student not enrolled");
            return Ok(RecomputeOutcome::NotFound {
                missing: Missing::Enrollment,
            });
        }

        tx.execute(
            "INSERT INTO submissions (student, assignment_id, score, time, contents)
             VALUES (?1, ?2, ?3, ?4, NULL)
             ON CONFLICT (student, assignment_id) DO UPDATE SET score = excluded.score",
            params![student, assignment.0, score, Utc::now().to_rfc3339()],
        )
        .map_err(|e| map_db_err!("save score", e))?;

        let outcome = GradeEngine::new(&roster, &roster).recompute_grade(class, student)?;

        tx.commit()
            .map_err(|e| map_db_err!("commit transaction", e))?;
        Ok(outcome)
    }

    /// Recompute and store one student's grade in a class.
    ///
    /// An unknown class is reported as an outcome, not an error.
    pub fn recompute_grade(&self, key: &ClassKey, student: &str) -> Result<RecomputeOutcome> {
        let Some(class) = class_id(&self.conn, key)? else {
            return Ok(RecomputeOutcome::NotFound {
                missing: Missing::Class,
            });
        };

        let tx = self
            .conn
            .unchecked_transaction()
            .map_err(|e| map_db_err!("begin transaction", e))?;
        let roster = SqliteRoster::new(&tx);
        let outcome = GradeEngine::new(&roster, &roster).recompute_grade(class, student)?;
        tx.commit()
            .map_err(|e| map_db_err!("commit transaction", e))?;
        Ok(outcome)
    }

    /// Recompute and store the grade of every student in a class
    pub fn recompute_class(&self, key: &ClassKey) -> Result<Vec<(String, RecomputeOutcome)>> {
        let class = require_class(&self.conn, key)?;

        let tx = self
            .conn
            .unchecked_transaction()
            .map_err(|e| map_db_err!("begin transaction", e))?;
        let roster = SqliteRoster::new(&tx);
        let outcomes = GradeEngine::new(&roster, &roster).recompute_class(class)?;
        tx.commit()
            .map_err(|e| map_db_err!("commit transaction", e))?;

        tracing::info!(class = %class, students = outcomes.len(), "class recomputed");
        Ok(outcomes)
    }

    /// Compute a grade from current scores without storing it
    pub fn preview_grade(&self, key: &ClassKey, student: &str) -> Result<RecomputeOutcome> {
        let class = require_class(&self.conn, key)?;
        let roster = self.roster();
        GradeEngine::new(&roster, &roster).compute_grade(class, student)
    }

    pub fn compute_gpa(&self, student: &str) -> Result<GpaSummary> {
        let roster = self.roster();
        GradeEngine::new(&roster, &roster).compute_gpa(student)
    }

    /// Every class a student is enrolled in
    pub fn student_classes(&self, student: &str) -> Result<Vec<EnrolledClass>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT co.subject, co.number, cl.season, cl.year, co.name, e.grade
                 FROM enrollments e
                 JOIN classes cl ON cl.id = e.class_id
                 JOIN courses co ON co.id = cl.course_id
                 WHERE e.student = ?1
                 ORDER BY cl.year, cl.season, co.subject, co.number",
            )
            .map_err(|e| map_db_err!("prepare classes query", e))?;

        let rows = stmt
            .query_map([student], |row| {
                Ok(EnrolledClass {
                    key: ClassKey {
                        subject: row.get(0)?,
                        number: row.get(1)?,
                        season: row.get(2)?,
                        year: row.get(3)?,
                    },
                    name: row.get(4)?,
                    grade: row.get(5)?,
                })
            })
            .map_err(|e| map_db_err!("query classes", e))?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| map_db_err!("read classes", e))
    }

    /// Assignments of a class with the student's scores
    pub fn student_assignments(
        &self,
        key: &ClassKey,
        student: &str,
    ) -> Result<Vec<StudentAssignment>> {
        let class = require_class(&self.conn, key)?;

        let mut stmt = self
            .conn
            .prepare(
                "SELECT c.name, a.name, a.points, a.due, s.score
                 FROM assignments a
                 JOIN categories c ON c.id = a.category_id
                 LEFT JOIN submissions s ON s.assignment_id = a.id AND s.student = ?2
                 WHERE c.class_id = ?1
                 ORDER BY c.id, a.id",
            )
            .map_err(|e| map_db_err!("prepare assignments query", e))?;

        let rows = stmt
            .query_map(params![class.0, student], |row| {
                Ok(StudentAssignment {
                    category: row.get(0)?,
                    name: row.get(1)?,
                    points: row.get(2)?,
                    due: row.get(3)?,
                    score: row.get(4)?,
                })
            })
            .map_err(|e| map_db_err!("query assignments", e))?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| map_db_err!("read assignments", e))
    }
}
