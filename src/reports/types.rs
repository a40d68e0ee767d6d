//! Report type definitions.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Line-oriented text blocks
    #[default]
    Text,
    /// Structured JSON output
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Context about the inputs of a diff, used by structured reports
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReportMetadata {
    /// Path of inventory A
    pub inventory_a: Option<String>,
    /// Path of inventory B
    pub inventory_b: Option<String>,
    /// Entities in inventory A
    pub entities_a: usize,
    /// Entities in inventory B
    pub entities_b: usize,
    /// Name of the comparator used
    pub comparator: String,
}
