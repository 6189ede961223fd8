//! gradebook-core — Student records, bonus adjustment, and grading.
//!
//! This crate defines the data model and the pure grading functions that
//! the report renderers and the CLI build on.

pub mod bonus;
pub mod error;
pub mod grading;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod roster;
pub mod summary;
