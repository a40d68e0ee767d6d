//! Configuration module for sbom-delta.
//!
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Configuration File
//!
//! Place a `.sbom-delta.yaml` file in your project root or
//! `~/.config/sbom-delta/`:
//!
//! ```yaml
//! diff:
//!   comparators: [sha256, size]
//!   fail_on_change: true
//! identify:
//!   use_extensions: false
//! output:
//!   format: json
//! ```

pub mod file;
mod types;
mod validation;

pub use types::{
    AppConfig, DiffConfig, DiffPaths, DiffSettings, IdentifyConfig, IdentifySettings,
    OutputConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    config_search_dirs, discover_config_file, generate_example_config, load_config_file,
    load_or_default, ConfigFileError, CONFIG_FILE_NAMES,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate and autocomplete `.sbom-delta.yaml`.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}
