//! gradebook-report — Text, JSON and Markdown rendering of class reports.

pub mod json;
pub mod markdown;
pub mod text;


/// Format an average the way the report prints it: integral values keep
/// one decimal (`0.0`), everything else uses the shortest form (`58.33`).
pub fn format_average(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Pass/fail tag with the letter grade embedded.
pub fn result_tag(passed: bool, grade: impl std::fmt::Display) -> String {
    if passed {
        format!("✅ PASSED ({grade})")
    } else {
        format!("❌ FAILED ({grade})")
    }
}
