//! The grading pipeline: bonus pass, then summaries, then the report.

use tracing::debug;

use crate::bonus::{apply_bonus_pass, BonusPolicy};
use crate::model::StudentRecord;
use crate::report::ClassReport;
use crate::summary::summarize_student;

/// Run the pipeline over `records`, mutating their scores when a bonus
/// policy is given.
pub fn grade_roster(records: &mut [StudentRecord], bonus: Option<&BonusPolicy>) -> ClassReport {
    if let Some(policy) = bonus {
        let adjusted = apply_bonus_pass(records, policy);
        debug!(adjusted, points = policy.points, cap = policy.cap, "bonus pass complete");
    }

    let students: Vec<_> = records.iter().map(summarize_student).collect();
    debug!(students = students.len(), "summarized roster");

    ClassReport::new(students)
}
