//! Core data model types for gradebook.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ParseGradeError, RosterError};

/// A single assignment score.
///
/// Integral values display without a fractional part (`90`), everything
/// else in shortest round-trip form (`97.5`).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(pub f64);

impl Score {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Score {
    fn from(value: f64) -> Self {
        Score(value)
    }
}

impl From<i32> for Score {
    fn from(value: i32) -> Self {
        Score(f64::from(value))
    }
}

impl From<Score> for f64 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_finite() && self.0.fract() == 0.0 && self.0.abs() < 1e15 {
            write!(f, "{}", self.0 as i64)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// One student's raw scores as entered in the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Display name, never empty.
    pub name: String,
    /// Assignment scores in entry order.
    #[serde(default)]
    pub scores: Vec<Score>,
    /// Whether the bonus pass adjusts this student's scores.
    #[serde(default)]
    pub bonus_eligible: bool,
}

impl StudentRecord {
    /// Build a record, rejecting blank names and non-finite scores.
    pub fn new<I, S>(
        name: impl Into<String>,
        scores: I,
        bonus_eligible: bool,
    ) -> Result<Self, RosterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<Score>,
    {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RosterError::EmptyName);
        }

        let scores: Vec<Score> = scores.into_iter().map(Into::into).collect();
        if let Some(index) = scores.iter().position(|s| !s.0.is_finite()) {
            return Err(RosterError::NonFiniteScore { name, index });
        }

        Ok(Self {
            name,
            scores,
            bonus_eligible,
        })
    }
}

/// Letter grades, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    F,
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LetterGrade::A => "A",
            LetterGrade::B => "B",
            LetterGrade::C => "C",
            LetterGrade::D => "D",
            LetterGrade::F => "F",
        };
        f.write_str(s)
    }
}

impl FromStr for LetterGrade {
    type Err = ParseGradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(LetterGrade::A),
            "B" => Ok(LetterGrade::B),
            "C" => Ok(LetterGrade::C),
            "D" => Ok(LetterGrade::D),
            "F" => Ok(LetterGrade::F),
            other => Err(ParseGradeError(other.to_string())),
        }
    }
}

/// Derived, read-only view of a [`StudentRecord`] after grading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentSummary {
    pub name: String,
    /// Copy of the record's scores at summarization time.
    pub scores: Vec<Score>,
    /// Mean score rounded to two decimals, `0.0` when there are no scores.
    pub average_score: f64,
    pub letter_grade: LetterGrade,
    pub passed: bool,
    /// Always equal to `scores.len()`.
    pub assignment_count: usize,
}
