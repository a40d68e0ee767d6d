//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Config file names recognized in each searched directory, in priority order.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".sbom-delta.yaml",
    ".sbom-delta.yml",
    "sbom-delta.yaml",
    "sbom-delta.yml",
];

/// Directories searched for a config file, highest priority first:
/// the current directory, the enclosing git repository root, the user
/// config directory (`~/.config/sbom-delta/`) and the home directory.
#[must_use]
pub fn config_search_dirs() -> Vec<PathBuf> {
    let cwd = std::env::current_dir().ok();
    let git_root = cwd.as_deref().and_then(find_git_root);

    let mut searched: Vec<PathBuf> = Vec::with_capacity(4);
    for dir in [
        cwd,
        git_root,
        dirs::config_dir().map(|d| d.join("sbom-delta")),
        dirs::home_dir(),
    ]
    .into_iter()
    .flatten()
    {
        if !searched.contains(&dir) {
            searched.push(dir);
        }
    }
    searched
}

/// Discover a config file.
///
/// An explicit path wins when it exists; otherwise the first recognized
/// file name found in [`config_search_dirs`] is used. A missing explicit
/// path is logged as a warning before falling back to the search.
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
        tracing::warn!(
            "Config file not found: {}; searching default locations",
            path.display()
        );
    }

    config_search_dirs()
        .iter()
        .find_map(|dir| find_config_in_dir(dir))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Walk up from `start` to the nearest directory containing `.git`.
fn find_git_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// File not found
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// IO error reading file
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml_ng::from_str(&content).map_err(|source| ConfigFileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load config from discovered file, or return default.
///
/// A file that exists but cannot be loaded is logged and ignored.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    let Some(path) = discover_config_file(explicit_path) else {
        return (AppConfig::default(), None);
    };

    match load_config_file(&path) {
        Ok(config) => (config, Some(path)),
        Err(e) => {
            tracing::warn!("{e}; using defaults");
            (AppConfig::default(), None)
        }
    }
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// Only values `other` actually sets override: a non-empty comparator
    /// list, `Some` output options, and `true` flags.
    pub fn merge(&mut self, other: &Self) {
        if !other.diff.comparators.is_empty() {
            self.diff.comparators.clone_from(&other.diff.comparators);
        }
        if other.diff.fail_on_change {
            self.diff.fail_on_change = true;
        }

        if !other.identify.use_extensions {
            self.identify.use_extensions = false;
        }

        if other.output.format.is_some() {
            self.output.format = other.output.format;
        }
        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }
    }

    /// Load from file and merge with CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        cli_overrides: &Self,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.merge(cli_overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate a commented example config file.
#[must_use]
pub fn generate_example_config() -> String {
    r"# sbom-delta configuration
# ========================
#
# Place this file at:
#   - .sbom-delta.yaml in your project root
#   - ~/.config/sbom-delta/sbom-delta.yaml for global config
#
# CLI arguments always override file settings.

diff:
  # Criteria for paths present in both inventories: sha256, sha1, md5, size.
  # Each failing criterion is reported separately. Empty means sha256.
  comparators: [sha256]
  # Exit with code 1 when any difference is reported
  fail_on_change: false

identify:
  # Fall back to the file extension when no signature matches
  use_extensions: true

output:
  # Format: text, json
  format: text
  # Output file path (omit for stdout)
  # file: report.txt
"
    .to_string()
}
