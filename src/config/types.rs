//! Configuration types for sbom-delta operations.

use crate::diff::ComparatorKind;
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Application configuration loaded from a config file and CLI arguments.
///
/// CLI arguments override file settings (see [`AppConfig::merge`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Inventory diff settings
    pub diff: DiffSettings,
    /// File identification settings
    pub identify: IdentifySettings,
    /// Output settings
    pub output: OutputConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Settings for `diff`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DiffSettings {
    /// Criteria checked for paths present in both inventories, in report
    /// order. Empty means SHA-256 only.
    pub comparators: Vec<ComparatorKind>,
    /// Exit with code 1 when any difference is reported
    pub fail_on_change: bool,
}

/// Settings for `identify`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct IdentifySettings {
    /// Fall back to the file extension when no signature matches
    pub use_extensions: bool,
}

impl Default for IdentifySettings {
    fn default() -> Self {
        Self {
            use_extensions: true,
        }
    }
}

/// Output settings shared by all commands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format (text when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<ReportFormat>,
    /// Output file path (stdout when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl OutputConfig {
    /// The format to use, defaulting to text
    #[must_use]
    pub fn effective_format(&self) -> ReportFormat {
        self.format.unwrap_or_default()
    }
}

// ============================================================================
// Command Configurations
// ============================================================================

/// Inventory paths for a diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffPaths {
    /// Baseline inventory
    pub a: PathBuf,
    /// Inventory compared against the baseline
    pub b: PathBuf,
}

/// Everything `diff` needs to run.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffConfig {
    pub paths: DiffPaths,
    pub settings: DiffSettings,
    pub output: OutputConfig,
    pub quiet: bool,
}

impl DiffConfig {
    /// Combine inventory paths with resolved application config.
    #[must_use]
    pub fn from_app(paths: DiffPaths, app: &AppConfig, quiet: bool) -> Self {
        Self {
            paths,
            settings: app.diff.clone(),
            output: app.output.clone(),
            quiet,
        }
    }
}

/// Everything `identify` needs to run.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifyConfig {
    pub paths: Vec<PathBuf>,
    pub settings: IdentifySettings,
    pub output: OutputConfig,
    pub quiet: bool,
}

impl IdentifyConfig {
    /// Combine target paths with resolved application config.
    #[must_use]
    pub fn from_app(paths: Vec<PathBuf>, app: &AppConfig, quiet: bool) -> Self {
        Self {
            paths,
            settings: app.identify.clone(),
            output: app.output.clone(),
            quiet,
        }
    }
}
