//! JSON report generator.

use super::{ReportError, ReportFormat, ReportGenerator, ReportMetadata};
use crate::diff::{DiffRecord, DiffSummary};
use crate::identify::Identification;
use chrono::Utc;
use serde::Serialize;

/// JSON report generator
#[derive(Debug, Clone, Copy)]
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn render<T: Serialize>(&self, value: &T) -> Result<String, ReportError> {
        if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        }
        .map_err(|e| ReportError::SerializationError(e.to_string()))
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct ToolInfo {
    name: &'static str,
    version: &'static str,
}

const TOOL: ToolInfo = ToolInfo {
    name: env!("CARGO_PKG_NAME"),
    version: env!("CARGO_PKG_VERSION"),
};

#[derive(Serialize)]
struct JsonDiffReport<'a> {
    tool: ToolInfo,
    generated_at: String,
    inputs: &'a ReportMetadata,
    summary: DiffSummary,
    records: &'a [DiffRecord],
}

#[derive(Serialize)]
struct JsonIdentifyReport<'a> {
    tool: ToolInfo,
    generated_at: String,
    files: &'a [Identification],
}

impl ReportGenerator for JsonReporter {
    fn generate_diff_report(
        &self,
        records: &[DiffRecord],
        metadata: &ReportMetadata,
    ) -> Result<String, ReportError> {
        self.render(&JsonDiffReport {
            tool: TOOL,
            generated_at: Utc::now().to_rfc3339(),
            inputs: metadata,
            summary: DiffSummary::from_records(records),
            records,
        })
    }

    fn generate_identify_report(
        &self,
        results: &[Identification],
    ) -> Result<String, ReportError> {
        self.render(&JsonIdentifyReport {
            tool: TOOL,
            generated_at: Utc::now().to_rfc3339(),
            files: results,
        })
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}
