//! Error types for roster construction and grade parsing.

use thiserror::Error;

/// Errors raised while building a [`StudentRecord`](crate::model::StudentRecord).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RosterError {
    /// The student's name was empty or only whitespace.
    #[error("student name must not be empty")]
    EmptyName,

    /// A score was NaN or infinite.
    #[error("score #{index} for {name} is not a finite number")]
    NonFiniteScore { name: String, index: usize },
}

/// Returned when a string does not name a letter grade.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown letter grade: {0}")]
pub struct ParseGradeError(pub String);
