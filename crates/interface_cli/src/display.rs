//! Terminal report of a finished claim record

use std::io::{self, Write};

use colored::Colorize;

use domain_claims::ClaimRecord;

const RULE_WIDTH: usize = 60;
const NONE: &str = "  (none)";

fn section<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out)?;
    writeln!(out, "{}", rule.bright_cyan())?;
    writeln!(out, "{}", title.bold())?;
    writeln!(out, "{}", rule.bright_cyan())
}

/// Writes the record section by section: raw text, extracted fields,
/// triage, issues, summary and trace
pub fn write_report<W: Write>(out: &mut W, record: &ClaimRecord) -> io::Result<()> {
    section(out, "RAW TEXT")?;
    writeln!(out, "{}", record.joined_text())?;

    section(out, "EXTRACTED FIELDS")?;
    if record.extracted_fields().is_empty() {
        writeln!(out, "{}", NONE)?;
    }
    for (key, value) in record.extracted_fields() {
        writeln!(out, "  {}: {}", key, value)?;
    }

    section(out, "TRIAGE")?;
    if record.triage().is_empty() {
        writeln!(out, "{}", NONE)?;
    }
    for (key, value) in record.triage() {
        writeln!(out, "  {}: {}", key, value)?;
    }

    section(out, "ISSUES")?;
    if record.issues().is_empty() {
        writeln!(out, "{}", NONE)?;
    }
    for issue in record.issues() {
        writeln!(out, "  - {}", issue.yellow())?;
    }

    section(out, "SUMMARY")?;
    writeln!(out, "{}", record.summary().unwrap_or("(no summary)"))?;

    section(out, "TRACE (stages that ran)")?;
    for entry in record.trace() {
        writeln!(
            out,
            "  [{}] {} -> {}",
            entry.timestamp.dimmed(),
            entry.stage,
            entry.action
        )?;
    }
    Ok(())
}
