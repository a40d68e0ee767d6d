//! Ordered identification strategies and file reading.

use super::{ExtensionIdentifier, FileType, MagicIdentifier, MAGIC_PREFIX_LEN};
use rayon::prelude::*;
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Trait for file type identification strategies.
///
/// Implementors return `None` when they cannot tell; that is never an error.
pub trait Identifier: Send + Sync {
    /// Identify a file from its path and the leading bytes read from it.
    ///
    /// `prefix` is empty when the file could not be read.
    fn identify(&self, path: &Path, prefix: &[u8]) -> Option<FileType>;

    /// Strategy name for logging and reports.
    fn name(&self) -> &'static str;
}

/// Result of identifying one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identification {
    /// The file that was examined
    pub path: PathBuf,
    /// The detected type, `None` when unknown
    pub file_type: Option<FileType>,
    /// The strategy that produced the answer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<&'static str>,
}

impl Identification {
    /// Report label: the type label, or `unknown`
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.file_type.as_ref().map_or("unknown", FileType::label)
    }
}

/// Strategies tried in registration order; the first answer wins.
pub struct IdentifierChain {
    strategies: Vec<Box<dyn Identifier>>,
}

impl Default for IdentifierChain {
    /// Magic bytes first, then file extension.
    fn default() -> Self {
        Self::empty()
            .register(MagicIdentifier::new())
            .register(ExtensionIdentifier)
    }
}

impl IdentifierChain {
    /// A chain with no strategies; identifies nothing
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    /// A chain with only the magic-byte strategy
    #[must_use]
    pub fn magic_only() -> Self {
        Self::empty().register(MagicIdentifier::new())
    }

    /// Append a strategy at the lowest priority
    #[must_use]
    pub fn register(mut self, identifier: impl Identifier + 'static) -> Self {
        self.strategies.push(Box::new(identifier));
        self
    }

    /// Strategy names in priority order
    #[must_use]
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Ask each strategy in turn, stopping at the first answer.
    #[must_use]
    pub fn identify(&self, path: &Path, prefix: &[u8]) -> Identification {
        for strategy in &self.strategies {
            if let Some(file_type) = strategy.identify(path, prefix) {
                return Identification {
                    path: path.to_path_buf(),
                    file_type: Some(file_type),
                    strategy: Some(strategy.name()),
                };
            }
        }

        Identification {
            path: path.to_path_buf(),
            file_type: None,
            strategy: None,
        }
    }

    /// Read a file's prefix and identify it.
    ///
    /// A read failure leaves the prefix empty; strategies that need no
    /// bytes can still answer.
    #[must_use]
    pub fn identify_file(&self, path: &Path) -> Identification {
        let prefix = read_prefix(path).unwrap_or_else(|e| {
            tracing::debug!("Could not read {}: {}", path.display(), e);
            Vec::new()
        });
        self.identify(path, &prefix)
    }

    /// Identify many files in parallel. Output order follows input order.
    #[must_use]
    pub fn identify_paths(&self, paths: &[PathBuf]) -> Vec<Identification> {
        paths.par_iter().map(|p| self.identify_file(p)).collect()
    }
}

impl std::fmt::Debug for IdentifierChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentifierChain")
            .field("strategies", &self.strategy_names())
            .finish()
    }
}

/// Classify a file by its leading bytes only.
///
/// Any failure to open or read the file yields `None`.
#[must_use]
pub fn identify_file(path: &Path) -> Option<FileType> {
    match read_prefix(path) {
        Ok(prefix) => super::identify(&prefix),
        Err(e) => {
            tracing::debug!("Could not read {}: {}", path.display(), e);
            None
        }
    }
}

/// Identify many files with the default chain, in parallel.
#[must_use]
pub fn identify_paths(paths: &[PathBuf]) -> Vec<Identification> {
    IdentifierChain::default().identify_paths(paths)
}

/// Read at most [`MAGIC_PREFIX_LEN`] bytes from the start of a file.
fn read_prefix(path: &Path) -> std::io::Result<Vec<u8>> {
    let file = std::fs::File::open(path)?;
    let mut prefix = Vec::with_capacity(MAGIC_PREFIX_LEN);
    file.take(MAGIC_PREFIX_LEN as u64).read_to_end(&mut prefix)?;
    Ok(prefix)
}
