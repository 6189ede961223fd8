//! The bonus pass: a fixed, capped score bump for flagged students.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{Score, StudentRecord};

/// How much the bonus pass adds and where it stops.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BonusPolicy {
    /// Points added to every score of an eligible student.
    #[serde(default = "default_points")]
    pub points: f64,
    /// No adjusted score exceeds this value.
    #[serde(default = "default_cap")]
    pub cap: f64,
}

fn default_points() -> f64 {
    2.0
}

fn default_cap() -> f64 {
    100.0
}

impl Default for BonusPolicy {
    fn default() -> Self {
        Self {
            points: default_points(),
            cap: default_cap(),
        }
    }
}

impl BonusPolicy {
    /// Adjust a single score.
    pub fn adjust(&self, score: Score) -> Score {
        Score((score.0 + self.points).min(self.cap))
    }
}

/// Apply the bonus pass once over the whole roster.
///
/// Eligible records get every score replaced by `min(s + points, cap)`;
/// order and length are preserved. Returns how many records were adjusted.
pub fn apply_bonus_pass(records: &mut [StudentRecord], policy: &BonusPolicy) -> usize {
    let mut adjusted = 0;
    for record in records.iter_mut().filter(|r| r.bonus_eligible) {
        record.scores = record.scores.iter().map(|&s| policy.adjust(s)).collect();
        debug!(student = %record.name, "applied bonus pass");
        adjusted += 1;
    }
    adjusted
}
