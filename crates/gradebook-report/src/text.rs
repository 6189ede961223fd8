//! The plain-text student score report.
//!
//! Layout, one block per student in roster order, then the class block:
//!
//! ```text
//! === Student Score Report ===
//!
//! Name: Avery Chen
//! Assignments: 4
//! Scores: [90, 94, 81, 97]
//! Average: 90.5
//! Result: ✅ PASSED (A)
//!
//! === Class Summary ===
//! Class Average: 90.5
//! Passing: 1/1
//! ```

use std::io::Write;

use anyhow::{Context, Result};

use gradebook_core::model::{Score, StudentSummary};
use gradebook_core::report::ClassReport;

use crate::{format_average, result_tag};

fn format_scores(scores: &[Score]) -> String {
    let items: Vec<String> = scores.iter().map(|s| s.to_string()).collect();
    format!("[{}]", items.join(", "))
}

fn push_student(out: &mut String, student: &StudentSummary) {
    out.push_str(&format!("\nName: {}\n", student.name));
    out.push_str(&format!("Assignments: {}\n", student.assignment_count));
    out.push_str(&format!("Scores: {}\n", format_scores(&student.scores)));
    out.push_str(&format!(
        "Average: {}\n",
        format_average(student.average_score)
    ));
    out.push_str(&format!(
        "Result: {}\n",
        result_tag(student.passed, student.letter_grade)
    ));
}

/// Render the full text report.
pub fn render_text(report: &ClassReport) -> String {
    let mut out = String::new();

    out.push_str("=== Student Score Report ===\n");
    for student in &report.students {
        push_student(&mut out, student);
    }

    out.push_str("\n=== Class Summary ===\n");
    out.push_str(&format!(
        "Class Average: {}\n",
        format_average(report.class.class_average)
    ));
    out.push_str(&format!(
        "Passing: {}/{}\n",
        report.class.passing, report.class.total
    ));

    out
}

/// Render the text report into `writer`.
pub fn write_text<W: Write>(report: &ClassReport, mut writer: W) -> Result<()> {
    writer
        .write_all(render_text(report).as_bytes())
        .context("failed to write text report")?;
    writer.flush().context("failed to flush text report")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradebook_core::model::LetterGrade;

    use crate::test_support::BrokenPipe;

    fn summary(name: &str, scores: &[f64], average: f64, grade: LetterGrade) -> StudentSummary {
        StudentSummary {
            name: name.into(),
            scores: scores.iter().copied().map(Score).collect(),
            average_score: average,
            letter_grade: grade,
            passed: matches!(grade, LetterGrade::A | LetterGrade::B | LetterGrade::C),
            assignment_count: scores.len(),
        }
    }

    #[test]
    fn renders_student_block() {
        let report = ClassReport::new(vec![summary(
            "Avery Chen",
            &[90.0, 94.0, 81.0, 97.0],
            90.5,
            LetterGrade::A,
        )]);
        let text = render_text(&report);

        assert!(text.starts_with("=== Student Score Report ===\n\nName: Avery Chen\n"));
        assert!(text.contains("Assignments: 4\n"));
        assert!(text.contains("Scores: [90, 94, 81, 97]\n"));
        assert!(text.contains("Average: 90.5\n"));
        assert!(text.contains("Result: ✅ PASSED (A)\n"));
        assert!(text.ends_with("\n=== Class Summary ===\nClass Average: 90.5\nPassing: 1/1\n"));
    }

    #[test]
    fn renders_empty_student() {
        let report = ClassReport::new(vec![summary("Nobody", &[], 0.0, LetterGrade::F)]);
        let text = render_text(&report);

        assert!(text.contains("Assignments: 0\nScores: []\nAverage: 0.0\nResult: ❌ FAILED (F)\n"));
        assert!(text.contains("Passing: 0/1"));
    }

    #[test]
    fn students_keep_input_order() {
        let report = ClassReport::new(vec![
            summary("Zed", &[85.0], 85.0, LetterGrade::B),
            summary("Amy", &[65.0], 65.0, LetterGrade::D),
        ]);
        let text = render_text(&report);

        let zed = text.find("Name: Zed").unwrap();
        let amy = text.find("Name: Amy").unwrap();
        assert!(zed < amy);
    }

    #[test]
    fn write_text_matches_render() {
        let report = ClassReport::new(vec![summary("Diego", &[72.5], 72.5, LetterGrade::C)]);
        let mut buf = Vec::new();
        write_text(&report, &mut buf).unwrap();

        assert_eq!(String::from_utf8(buf).unwrap(), render_text(&report));
    }

    #[test]
    fn write_text_reports_closed_pipe() {
        let report = ClassReport::new(vec![summary("Diego", &[72.5], 72.5, LetterGrade::C)]);
        let err = write_text(&report, BrokenPipe).unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.starts_with("failed to write text report"));
        assert!(chain.contains("broken pipe"));
    }
}
