//! Report generation for diff and identification results.
//!
//! - Text: the line-oriented block layout (`<path>:` followed by `<` / `>`
//!   lines), stable across runs so reports can themselves be diffed
//! - JSON: structured data for programmatic integration

mod json;
mod text;
mod types;

pub use json::JsonReporter;
pub use text::TextReporter;
pub use types::{ReportFormat, ReportMetadata};

use crate::diff::DiffRecord;
use crate::identify::Identification;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report from diff records
    fn generate_diff_report(
        &self,
        records: &[DiffRecord],
        metadata: &ReportMetadata,
    ) -> Result<String, ReportError>;

    /// Generate a report from identification results
    fn generate_identify_report(&self, results: &[Identification])
        -> Result<String, ReportError>;

    /// Write a diff report to a writer
    fn write_diff_report(
        &self,
        records: &[DiffRecord],
        metadata: &ReportMetadata,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate_diff_report(records, metadata)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Text => Box::new(TextReporter::new()),
        ReportFormat::Json => Box::new(JsonReporter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_reporter_format() {
        assert_eq!(create_reporter(ReportFormat::Text).format(), ReportFormat::Text);
        assert_eq!(create_reporter(ReportFormat::Json).format(), ReportFormat::Json);
    }

    #[test]
    fn test_write_diff_report_to_buffer() {
        let records = vec![DiffRecord::Presence {
            path: "/a".into(),
            present_in: crate::diff::Side::A,
        }];
        let mut buffer = Vec::new();
        TextReporter::new()
            .write_diff_report(&records, &ReportMetadata::default(), &mut buffer)
            .unwrap();
        assert!(String::from_utf8(buffer).unwrap().starts_with("/a:\n"));
    }
}
