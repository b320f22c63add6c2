//! Weighted scaling and letter classification
//!
//! Only categories that have assignments worth more than zero points take
//! part. Their weights are rescaled so the exercised weight sums to 100,
//! so class weights do not need to add up to 100 themselves.

use serde::Serialize;

use super::category::CategoryTally;
use super::letter::LetterGrade;

/// Inclusive lower bounds in percent, highest first. Anything below the last
/// bound is an E.
pub const GRADE_THRESHOLDS: [(f64, LetterGrade); 11] = [
    (93.0, LetterGrade::A),
    (90.0, LetterGrade::AMinus),
    (87.0, LetterGrade::BPlus),
    (83.0, LetterGrade::B),
    (80.0, LetterGrade::BMinus),
    (77.0, LetterGrade::CPlus),
    (73.0, LetterGrade::C),
    (70.0, LetterGrade::CMinus),
    (67.0, LetterGrade::DPlus),
    (63.0, LetterGrade::D),
    (60.0, LetterGrade::DMinus),
];

/// Map a final percentage onto a letter grade.
pub fn classify(percentage: f64) -> LetterGrade {
    GRADE_THRESHOLDS
        .iter()
        .find(|(bound, _)| percentage >= *bound)
        .map(|(_, grade)| *grade)
        .unwrap_or(LetterGrade::E)
}

/// Result of scaling a set of category tallies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaledGrade {
    /// Final percentage on a 0-100 scale (can exceed 100 with extra credit)
    pub percentage: f64,
    /// Letter grade for `percentage`
    pub letter: LetterGrade,
    /// Sum of the weights that were actually counted
    pub total_weight: u64,
}

/// Combine participating category tallies into a letter grade.
///
/// Returns `None` when no counted category carries any weight, in which case
/// no grade should be written.
pub fn scale(tallies: &[CategoryTally]) -> Option<ScaledGrade> {
    let mut weighted_score = 0.0;
    let mut total_weight = 0u64;

    for tally in tallies {
        let Some(fraction) = tally.fraction() else {
            continue;
        };
        weighted_score += fraction * f64::from(tally.weight);
        total_weight += u64::from(tally.weight);
    }

    if total_weight == 0 {
        return None;
    }

    let scaling_factor = 100.0 / total_weight as f64;
    let percentage = weighted_score * scaling_factor;

    Some(ScaledGrade {
        percentage,
        letter: classify(percentage),
        total_weight,
    })
}
