//! Per-category point aggregation
//!
//! Sums one student's scores over the assignments of a single category.
//! A category without assignments does not participate in grading at all,
//! which is different from a category whose assignments are all worth 0.

use serde::Serialize;

/// Points earned and possible for one student in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTally {
    /// Category name, unique within its class
    pub name: String,
    /// Relative weight within the class
    pub weight: u32,
    /// Sum of the student's scores; missing submissions count as 0
    pub points_earned: u64,
    /// Sum of the assignments' maximum points
    pub points_possible: u64,
}

impl CategoryTally {
    /// Aggregate a category from `(max points, score)` pairs, one per assignment.
    ///
    /// Returns `None` when the category has no assignments.
    pub fn aggregate<I>(name: impl Into<String>, weight: u32, assignments: I) -> Option<Self>
    where
        I: IntoIterator<Item = (u32, Option<u32>)>,
    {
        let mut participating = false;
        let mut points_earned = 0u64;
        let mut points_possible = 0u64;

        for (points, score) in assignments {
            participating = true;
            points_possible += u64::from(points);
            points_earned += u64::from(score.unwrap_or(0));
        }

        participating.then(|| CategoryTally {
            name: name.into(),
            weight,
            points_earned,
            points_possible,
        })
    }

    /// Fraction of possible points earned, or `None` when nothing is possible.
    pub fn fraction(&self) -> Option<f64> {
        (self.points_possible > 0).then(|| self.points_earned as f64 / self.points_possible as f64)
    }
}
