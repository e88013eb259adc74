//! Output module for rendering validation reports
//!
//! This module handles:
//! - Terminal summaries
//! - Markdown reports
//! - JSON export
//! - Writing to a file or stdout

mod markdown;
mod text;

pub use crate::config::OutputFormat;
pub use markdown::format_markdown;
pub use text::format_text;

use crate::directives::ParsedCrawlDirectives;
use crate::validate::ValidationReport;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to format output: {0}")]
    Format(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Formats reports as pretty-printed JSON
///
/// A single report is written as an object, several as an array.
pub fn format_json(reports: &[ValidationReport]) -> OutputResult<String> {
    let json = match reports {
        [report] => serde_json::to_string_pretty(report)?,
        _ => serde_json::to_string_pretty(reports)?,
    };
    Ok(json)
}

/// Renders reports in the requested format
pub fn render(reports: &[ValidationReport], format: OutputFormat) -> OutputResult<String> {
    match format {
        OutputFormat::Text => Ok(reports
            .iter()
            .map(format_text)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Markdown => Ok(reports
            .iter()
            .map(format_markdown)
            .collect::<Vec<_>>()
            .join("\n---\n\n")),
        OutputFormat::Json => format_json(reports),
    }
}

/// Writes rendered output to `path`, or to stdout when no path is given
pub fn write_report(contents: &str, path: Option<&Path>) -> OutputResult<()> {
    match path {
        Some(path) => {
            let mut file = File::create(path)?;
            file.write_all(contents.as_bytes())?;
            if !contents.ends_with('\n') {
                file.write_all(b"\n")?;
            }
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", contents.trim_end_matches('\n'))?;
        }
    }
    Ok(())
}

/// Summarizes directive flags, e.g. "noindex, nofollow" or "none"
pub(crate) fn describe_flags(directives: &ParsedCrawlDirectives) -> String {
    let flags = directives.active_flags();
    if flags.is_empty() {
        "none".to_string()
    } else {
        flags.join(", ")
    }
}
