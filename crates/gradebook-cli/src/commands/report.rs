//! The default report command.

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{info, warn};

use gradebook_core::bonus::BonusPolicy;
use gradebook_core::pipeline::grade_roster;
use gradebook_core::roster::{sample_roster, validate_roster, ValidationWarning};
use gradebook_report::json::write_json;
use gradebook_report::markdown::write_markdown;
use gradebook_report::text::write_text;

pub fn execute(format: String, no_bonus: bool) -> Result<()> {
    run(&format, no_bonus, io::stdout().lock())
}

/// Grade the sample roster and write the report in `format` to `writer`.
fn run<W: Write>(format: &str, no_bonus: bool, writer: W) -> Result<()> {
    anyhow::ensure!(
        matches!(format, "text" | "json" | "markdown" | "md"),
        "unknown format: {format} (expected text, json, or markdown)"
    );

    let mut roster = sample_roster().context("failed to build the sample roster")?;
    log_roster_warnings(&validate_roster(&roster));

    let policy = BonusPolicy::default();
    let bonus = if no_bonus { None } else { Some(&policy) };
    let report = grade_roster(&mut roster, bonus);
    info!(
        students = report.class.total,
        passing = report.class.passing,
        "report ready"
    );

    match format {
        "json" => write_json(&report, writer),
        "markdown" | "md" => write_markdown(&report, writer),
        _ => write_text(&report, writer),
    }
}

/// Log each roster warning, returning how many were logged.
fn log_roster_warnings(warnings: &[ValidationWarning]) -> usize {
    for w in warnings {
        match &w.student {
            Some(name) => warn!("[{name}] {}", w.message),
            None => warn!("{}", w.message),
        }
    }
    warnings.len()
}
