//! Plain-text report generator.

use super::{ReportError, ReportFormat, ReportGenerator, ReportMetadata};
use crate::diff::{DiffRecord, Side};
use crate::identify::Identification;
use std::fmt::Write;

const EXISTS: &str = "EXISTS";
const DOES_NOT_EXIST: &str = "DOES NOT EXIST";

/// Text reporter producing one block per differing path:
///
/// ```text
/// /usr/bin/ls:
///     < SHA256: 111
///     > SHA256: 222
///
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TextReporter;

impl TextReporter {
    /// Create a new text reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn write_record(out: &mut String, record: &DiffRecord) -> std::fmt::Result {
        match record {
            DiffRecord::Mismatch {
                path,
                criterion,
                value_a,
                value_b,
            } => {
                writeln!(out, "{path}:")?;
                writeln!(out, "    < {criterion}: {value_a}")?;
                writeln!(out, "    > {criterion}: {value_b}")?;
            }
            DiffRecord::Presence { path, .. } => {
                writeln!(out, "{path}:")?;
                writeln!(out, "    < {}", presence_label(record, Side::A))?;
                writeln!(out, "    > {}", presence_label(record, Side::B))?;
            }
        }
        writeln!(out)
    }
}

fn presence_label(record: &DiffRecord, side: Side) -> &'static str {
    if record.is_present_in(side) {
        EXISTS
    } else {
        DOES_NOT_EXIST
    }
}

impl ReportGenerator for TextReporter {
    fn generate_diff_report(
        &self,
        records: &[DiffRecord],
        _metadata: &ReportMetadata,
    ) -> Result<String, ReportError> {
        let mut out = String::new();
        for record in records {
            Self::write_record(&mut out, record)?;
        }
        Ok(out)
    }

    fn generate_identify_report(
        &self,
        results: &[Identification],
    ) -> Result<String, ReportError> {
        let mut out = String::new();
        for result in results {
            writeln!(out, "{}: {}", result.path.display(), result.label())?;
        }
        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Text
    }
}
