//! Output rendering for reports.
//!
//! Turns a [`Report`] into the final plain-text artifact: the directory tree,
//! a blank line, then one framed section per file. File content is preserved
//! exactly as it was read.

use crate::{Report, ReportError};
use std::fs;
use std::path::Path;

/// Width of the `=` separator line framing each file section.
const SEPARATOR_WIDTH: usize = 77;

/// Renders the report into its final text form.
pub fn render_report(report: &Report) -> String {
    let separator = "=".repeat(SEPARATOR_WIDTH);
    let mut out = String::with_capacity(1024);
    out.push_str(&report.tree);
    out.push('\n');

    for section in &report.sections {
        out.push_str(&format!("{}:\n", section.path.display()));
        out.push_str(&separator);
        out.push('\n');
        out.push_str(&section.content);
        out.push('\n');
        out.push_str(&separator);
        out.push_str("\n\n");
    }
    out
}

/// Renders the report and writes it to a file, truncating if it exists.
pub fn write_report_to_file(report: &Report, path: impl AsRef<Path>) -> Result<(), ReportError> {
    let content = render_report(report);
    fs::write(&path, content).map_err(|e| ReportError::io(path.as_ref(), e))?;
    Ok(())
}
