//! Grade recomputation and GPA orchestration
//!
//! A grade is always recomputed from scratch from the roster. Nothing is
//! written unless a letter grade was produced; missing classes, missing
//! enrollments and classes without graded categories leave the stored grade
//! untouched.

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, instrument};

use super::category::CategoryTally;
use super::gpa::GpaSummary;
use super::letter::LetterGrade;
use super::scale::{scale, ScaledGrade};
use crate::error::Result;
use crate::roster::{ClassId, GradeWriter, RosterProvider};
use crate::trace_time;

/// Which record a recompute request could not resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Missing {
    Class,
    Enrollment,
}

/// A successfully computed grade and the category totals behind it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeComputation {
    pub letter: LetterGrade,
    pub percentage: f64,
    pub total_weight: u64,
    /// Participating categories only
    pub categories: Vec<CategoryTally>,
}

/// What a recompute request did.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RecomputeOutcome {
    /// A letter grade was computed (and written, for `recompute_*`)
    Recomputed(GradeComputation),
    /// The class or enrollment does not exist; nothing written
    NotFound { missing: Missing },
    /// No category with assignments carries weight; nothing written
    NoParticipatingCategories,
}

impl RecomputeOutcome {
    /// The computed letter grade, if any
    pub fn letter(&self) -> Option<LetterGrade> {
        match self {
            RecomputeOutcome::Recomputed(computation) => Some(computation.letter),
            _ => None,
        }
    }
}

/// Grade computation engine over a roster reader and a grade writer.
pub struct GradeEngine<'a, R: ?Sized, W: ?Sized> {
    roster: &'a R,
    writer: &'a W,
}

impl<'a, R, W> GradeEngine<'a, R, W>
where
    R: RosterProvider + ?Sized,
    W: GradeWriter + ?Sized,
{
    pub fn new(roster: &'a R, writer: &'a W) -> Self {
        Self { roster, writer }
    }

    /// Compute a student's grade for a class without writing it.
    #[instrument(skip(self), fields(class = %class))]
    pub fn compute_grade(&self, class: ClassId, student: &str) -> Result<RecomputeOutcome> {
        let start = Instant::now();

        if !self.roster.class_exists(class)? {
            debug!("class not found, skipping");
            return Ok(RecomputeOutcome::NotFound {
                missing: Missing::Class,
            });
        }
        if !self.roster.is_enrolled(student, class)? {
            debug!("student not enrolled, skipping");
            return Ok(RecomputeOutcome::NotFound {
                missing: Missing::Enrollment,
            });
        }

        let mut tallies = Vec::new();
        for category in self.roster.categories(class)? {
            let assignments = self.roster.assignments(category.id)?;
            let mut points = Vec::with_capacity(assignments.len());
            for assignment in &assignments {
                points.push((assignment.points, self.roster.score(student, assignment.id)?));
            }
            if let Some(tally) = CategoryTally::aggregate(category.name, category.weight, points) {
                tallies.push(tally);
            }
        }

        let outcome = match scale(&tallies) {
            Some(ScaledGrade {
                percentage,
                letter,
                total_weight,
            }) => RecomputeOutcome::Recomputed(GradeComputation {
                letter,
                percentage,
                total_weight,
                categories: tallies,
            }),
            None => RecomputeOutcome::NoParticipatingCategories,
        };

        trace_time!(start, "compute_grade");
        Ok(outcome)
    }

    /// Recompute a student's grade for a class and persist it.
    ///
    /// The writer is called only for [`RecomputeOutcome::Recomputed`].
    pub fn recompute_grade(&self, class: ClassId, student: &str) -> Result<RecomputeOutcome> {
        let outcome = self.compute_grade(class, student)?;

        if let RecomputeOutcome::Recomputed(computation) = &outcome {
            self.writer.write_grade(student, class, computation.letter)?;
            debug!(
                class = %class,
                student,
                letter = %computation.letter,
                percentage = computation.percentage,
                "grade written"
            );
        }

        Ok(outcome)
    }

    /// Recompute the grade of every student enrolled in a class.
    #[instrument(skip(self), fields(class = %class))]
    pub fn recompute_class(&self, class: ClassId) -> Result<Vec<(String, RecomputeOutcome)>> {
        if !self.roster.class_exists(class)? {
            return Ok(Vec::new());
        }

        let mut outcomes = Vec::new();
        for student in self.roster.enrolled_students(class)? {
            let outcome = self.recompute_grade(class, &student)?;
            outcomes.push((student, outcome));
        }
        Ok(outcomes)
    }

    /// Compute a student's GPA from their stored enrollment grades.
    #[instrument(skip(self))]
    pub fn compute_gpa(&self, student: &str) -> Result<GpaSummary> {
        let enrollments = self.roster.enrollments(student)?;
        let summary = GpaSummary::from_grades(enrollments.iter().map(|e| e.grade.as_deref()));
        debug!(
            gpa = summary.gpa,
            counted = summary.counted,
            excluded = summary.excluded,
            "gpa computed"
        );
        Ok(summary)
    }
}
