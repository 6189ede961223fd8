//! Per-student and class-wide summaries.

use serde::{Deserialize, Serialize};

use crate::grading::{calculate_average, determine_letter_grade, did_student_pass, round_to};
use crate::model::{StudentRecord, StudentSummary};

/// Decimal places kept on reported averages.
pub const AVERAGE_PLACES: u32 = 2;

/// Grade one student.
///
/// The letter grade comes from the unrounded mean; only the reported
/// average is rounded.
pub fn summarize_student(record: &StudentRecord) -> StudentSummary {
    let average = calculate_average(record.scores.iter().map(|s| s.value()));
    let letter_grade = determine_letter_grade(average);

    StudentSummary {
        name: record.name.clone(),
        scores: record.scores.clone(),
        average_score: round_to(average, AVERAGE_PLACES),
        letter_grade,
        passed: did_student_pass(letter_grade),
        assignment_count: record.scores.len(),
    }
}

/// Class-wide aggregate over all student summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSummary {
    /// Mean of the students' rounded averages, itself rounded.
    pub class_average: f64,
    /// Students with a passing grade.
    pub passing: usize,
    /// Number of students summarized.
    pub total: usize,
}

/// Aggregate student summaries into the class block.
pub fn summarize_class(summaries: &[StudentSummary]) -> ClassSummary {
    let class_average = calculate_average(summaries.iter().map(|s| s.average_score));

    ClassSummary {
        class_average: round_to(class_average, AVERAGE_PLACES),
        passing: summaries.iter().filter(|s| s.passed).count(),
        total: summaries.len(),
    }
}
