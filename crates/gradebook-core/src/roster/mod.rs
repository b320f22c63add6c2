//! Read and write interfaces the grading engine consumes
//!
//! The engine never touches storage directly. Hosts hand it a
//! [`RosterProvider`] to read classes, categories, assignments, scores and
//! enrollments, and a [`GradeWriter`] to persist a computed letter grade.

mod memory;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::grading::LetterGrade;

pub use memory::MemoryRoster;

macro_rules! id_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(
    /// Identifies one offering of a course in one term
    ClassId
);
id_newtype!(
    /// Identifies an assignment category within a class
    CategoryId
);
id_newtype!(
    /// Identifies an assignment within a category
    AssignmentId
);

/// An assignment category as seen by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRecord {
    pub id: CategoryId,
    pub name: String,
    pub weight: u32,
}

/// An assignment as seen by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignmentRecord {
    pub id: AssignmentId,
    pub name: String,
    /// Maximum point value
    pub points: u32,
}

/// One of a student's enrollments and its stored grade.
///
/// `grade` is kept as the raw stored label because storage may hold values
/// the engine never writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrollmentRecord {
    pub class: ClassId,
    pub grade: Option<String>,
}

/// Read access to the roster data a grade computation needs.
pub trait RosterProvider {
    /// Whether the class exists at all
    fn class_exists(&self, class: ClassId) -> Result<bool>;

    /// Whether the student is enrolled in the class
    fn is_enrolled(&self, student: &str, class: ClassId) -> Result<bool>;

    /// All assignment categories of a class
    fn categories(&self, class: ClassId) -> Result<Vec<CategoryRecord>>;

    /// All assignments of a category
    fn assignments(&self, category: CategoryId) -> Result<Vec<AssignmentRecord>>;

    /// The student's score for an assignment, if a submission exists
    fn score(&self, student: &str, assignment: AssignmentId) -> Result<Option<u32>>;

    /// Every enrollment of a student with its stored grade
    fn enrollments(&self, student: &str) -> Result<Vec<EnrollmentRecord>>;

    /// Students enrolled in a class
    fn enrolled_students(&self, class: ClassId) -> Result<Vec<String>>;
}

/// Persists a computed grade onto an enrollment.
pub trait GradeWriter {
    /// Overwrite the grade of the (student, class) enrollment
    fn write_grade(&self, student: &str, class: ClassId, grade: LetterGrade) -> Result<()>;
}
