//! Averages, letter grades, and pass/fail decisions.
//!
//! Every function here is pure. Rounding is half away from zero on the
//! scaled value, see [`round_to`].

use crate::model::LetterGrade;

/// Letter grade tiers, highest first. The first tier whose lower bound
/// the average reaches wins; anything below the last tier is an F.
pub const GRADE_THRESHOLDS: [(f64, LetterGrade); 4] = [
    (90.0, LetterGrade::A),
    (80.0, LetterGrade::B),
    (70.0, LetterGrade::C),
    (60.0, LetterGrade::D),
];

/// Arithmetic mean, or `0.0` for an empty input.
pub fn calculate_average<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (count, sum) = values
        .into_iter()
        .fold((0usize, 0.0f64), |(n, total), v| (n + 1, total + v));
    if count == 0 {
        return 0.0;
    }
    sum / count as f64
}

/// Map a numeric average onto a letter grade.
pub fn determine_letter_grade(average: f64) -> LetterGrade {
    GRADE_THRESHOLDS
        .iter()
        .find(|(lower_bound, _)| average >= *lower_bound)
        .map(|&(_, grade)| grade)
        .unwrap_or(LetterGrade::F)
}

/// A, B and C pass; D and F fail.
pub fn did_student_pass(grade: LetterGrade) -> bool {
    matches!(grade, LetterGrade::A | LetterGrade::B | LetterGrade::C)
}

/// Round `value` to `places` decimals, half away from zero.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}
