//! Grade point average across enrollments
//!
//! Every graded class counts with the same weight. Enrollments without a
//! recognized letter grade are left out of both the sum and the count.

use serde::Serialize;

/// Placeholder shown for an enrollment that has no grade yet.
pub const NO_GRADE_MARKER: &str = "--";

/// Grade points per letter label.
pub const GRADE_POINTS: [(&str, f64); 12] = [
    ("A", 4.0),
    ("A-", 3.7),
    ("B+", 3.3),
    ("B", 3.0),
    ("B-", 2.7),
    ("C+", 2.3),
    ("C", 2.0),
    ("C-", 1.7),
    ("D+", 1.3),
    ("D", 1.0),
    ("D-", 0.7),
    ("E", 0.0),
];

/// Look up the grade points for a stored label.
///
/// Returns `None` for labels outside the table, including the empty string
/// and [`NO_GRADE_MARKER`].
pub fn grade_points(label: &str) -> Option<f64> {
    GRADE_POINTS
        .iter()
        .find(|(known, _)| *known == label)
        .map(|(_, points)| *points)
}

/// Unweighted GPA together with how many enrollments fed into it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GpaSummary {
    /// Mean grade points over counted enrollments, 0.0 when none counted
    pub gpa: f64,
    /// Enrollments with a recognized grade
    pub counted: usize,
    /// Enrollments that were skipped (ungraded or unrecognized)
    pub excluded: usize,
}

impl GpaSummary {
    /// Aggregate stored grades, one entry per enrollment.
    pub fn from_grades<'a, I>(grades: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let mut sum = 0.0;
        let mut counted = 0usize;
        let mut excluded = 0usize;

        for grade in grades {
            match grade.and_then(grade_points) {
                Some(points) => {
                    sum += points;
                    counted += 1;
                }
                None => excluded += 1,
            }
        }

        let gpa = if counted > 0 {
            sum / counted as f64
        } else {
            0.0
        };

        GpaSummary {
            gpa,
            counted,
            excluded,
        }
    }
}
