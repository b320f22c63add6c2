//! Rendering of recompute outcomes in each output format

use gradebook_core::db::ClassKey;
use gradebook_core::format::escape_quotes;
use gradebook_core::grading::{Missing, RecomputeOutcome};
use serde_json::{json, Value};

/// Short machine-readable label for an outcome
pub fn outcome_status(outcome: &RecomputeOutcome) -> &'static str {
    match outcome {
        RecomputeOutcome::Recomputed(_) => "recomputed",
        RecomputeOutcome::NotFound {
            missing: Missing::Class,
        } => "class_not_found",
        RecomputeOutcome::NotFound {
            missing: Missing::Enrollment,
        } => "not_enrolled",
        RecomputeOutcome::NoParticipatingCategories => "no_participating_categories",
    }
}

/// Two-decimal percentage, truncated so it never reads as the next letter
/// up. The small offset absorbs float error such as 56.99999999999999.
pub fn display_percentage(percentage: f64) -> String {
    let truncated = ((percentage * 100.0) + 1e-7).floor() / 100.0;
    format!("{:.2}", truncated)
}

pub fn outcome_json(key: &ClassKey, student: &str, outcome: &RecomputeOutcome) -> Value {
    json!({
        "class": key,
        "student": student,
        "outcome": outcome,
    })
}

pub fn print_outcome_human(key: &ClassKey, student: &str, outcome: &RecomputeOutcome) {
    match outcome {
        RecomputeOutcome::Recomputed(computation) => println!(
            "{} in {}: {} ({}%)",
            student,
            key,
            computation.letter,
            display_percentage(computation.percentage)
        ),
        RecomputeOutcome::NotFound {
            missing: Missing::Class,
        } => println!("Grade unchanged: class {} not found", key),
        RecomputeOutcome::NotFound {
            missing: Missing::Enrollment,
        } => println!("Grade unchanged: {} is not enrolled in {}", student, key),
        RecomputeOutcome::NoParticipatingCategories => {
            println!("Grade unchanged: no graded categories in {}", key)
        }
    }
}

pub fn print_outcome_records(key: &ClassKey, student: &str, outcome: &RecomputeOutcome) {
    for line in outcome_records(key, student, outcome) {
        println!("{}", line);
    }
}

/// G line for the grade, then one C line per participating category
fn outcome_records(key: &ClassKey, student: &str, outcome: &RecomputeOutcome) -> Vec<String> {
    let class = escape_quotes(&key.to_string());
    let mut grade_line = format!(
        "G class=\"{}\" student={} status={}",
        class,
        student,
        outcome_status(outcome)
    );

    let RecomputeOutcome::Recomputed(computation) = outcome else {
        return vec![grade_line];
    };

    grade_line.push_str(&format!(
        " letter={} percentage={} weight={}",
        computation.letter,
        display_percentage(computation.percentage),
        computation.total_weight
    ));

    let mut lines = vec![grade_line];
    for category in &computation.categories {
        lines.push(format!(
            "C class=\"{}\" name=\"{}\" weight={} earned={} possible={}",
            class,
            escape_quotes(&category.name),
            category.weight,
            category.points_earned,
            category.points_possible
        ));
    }
    lines
}
