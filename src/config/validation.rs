//! Configuration validation for sbom-delta.

use super::types::{AppConfig, DiffSettings, OutputConfig};

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.diff.validate());
        errors.extend(self.output.validate());
        errors
    }
}

impl Validatable for DiffSettings {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        for (idx, kind) in self.comparators.iter().enumerate() {
            if self.comparators[..idx].contains(kind) {
                errors.push(ConfigError {
                    field: "diff.comparators".to_string(),
                    message: format!("Comparator '{kind}' is listed more than once"),
                });
            }
        }
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(parent) = self.file.as_deref().and_then(std::path::Path::parent) {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                errors.push(ConfigError {
                    field: "output.file".to_string(),
                    message: format!("Parent directory does not exist: {}", parent.display()),
                });
            }
        }

        errors
    }
}
