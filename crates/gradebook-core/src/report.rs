//! The class report bundle consumed by the renderers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::StudentSummary;
use crate::summary::{summarize_class, ClassSummary};

/// Everything a renderer needs: per-student summaries in roster order and
/// the class aggregate computed from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassReport {
    /// When the report was produced.
    pub generated_at: DateTime<Utc>,
    /// Student summaries, in the order the records were given.
    pub students: Vec<StudentSummary>,
    /// Class-wide aggregate.
    pub class: ClassSummary,
}

impl ClassReport {
    /// Build a report stamped with the current time.
    pub fn new(students: Vec<StudentSummary>) -> Self {
        Self::at(students, Utc::now())
    }

    /// Build a report with an explicit timestamp.
    pub fn at(students: Vec<StudentSummary>, generated_at: DateTime<Utc>) -> Self {
        let class = summarize_class(&students);
        Self {
            generated_at,
            students,
            class,
        }
    }

    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
