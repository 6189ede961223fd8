//! Markdown report: one table row per student plus the class summary.

use std::io::Write;

use anyhow::{Context, Result};
use comfy_table::presets::ASCII_MARKDOWN;
use comfy_table::Table;

use gradebook_core::report::ClassReport;

use crate::{format_average, result_tag};

/// Render the report as Markdown.
pub fn render_markdown(report: &ClassReport) -> String {
    let mut md = String::new();

    md.push_str("## Student Score Report\n\n");
    md.push_str(&format!(
        "_Generated {}_\n\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    let mut table = Table::new();
    table.load_preset(ASCII_MARKDOWN);
    table.set_header(vec!["Name", "Assignments", "Average", "Grade", "Result"]);
    for s in &report.students {
        table.add_row(vec![
            s.name.clone(),
            s.assignment_count.to_string(),
            format_average(s.average_score),
            s.letter_grade.to_string(),
            result_tag(s.passed, s.letter_grade),
        ]);
    }
    md.push_str(&table.to_string());
    md.push_str("\n\n");

    md.push_str("### Class Summary\n\n");
    md.push_str(&format!(
        "- **Class Average:** {}\n",
        format_average(report.class.class_average)
    ));
    md.push_str(&format!(
        "- **Passing:** {}/{}\n",
        report.class.passing, report.class.total
    ));

    md
}

/// Render the Markdown report into `writer`.
pub fn write_markdown<W: Write>(report: &ClassReport, mut writer: W) -> Result<()> {
    writer
        .write_all(render_markdown(report).as_bytes())
        .context("failed to write markdown report")?;
    writer.flush().context("failed to flush markdown report")?;
    Ok(())
}
