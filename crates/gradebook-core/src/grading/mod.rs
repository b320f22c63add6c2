//! Grade computation: category aggregation, weighted scaling and GPA

pub mod category;
pub mod engine;
pub mod gpa;
pub mod letter;
pub mod scale;

pub use category::CategoryTally;
pub use engine::{GradeComputation, GradeEngine, Missing, RecomputeOutcome};
pub use gpa::{grade_points, GpaSummary, NO_GRADE_MARKER};
pub use letter::LetterGrade;
pub use scale::{classify, scale, ScaledGrade};
