//! JSON report output.

use std::io::Write;

use anyhow::{Context, Result};

use gradebook_core::report::ClassReport;

/// Render the report as pretty-printed JSON.
pub fn render_json(report: &ClassReport) -> Result<String> {
    report.to_json().context("failed to serialize report")
}

/// Render the JSON report into `writer`, followed by a newline.
pub fn write_json<W: Write>(report: &ClassReport, mut writer: W) -> Result<()> {
    let json = render_json(report)?;
    writeln!(writer, "{json}").context("failed to write json report")?;
    writer.flush().context("failed to flush json report")?;
    Ok(())
}
