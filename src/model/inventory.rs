//! Inventory documents and their JSON reader.

use super::SoftwareEntity;
use crate::error::{ErrorContext, ParseErrorKind, Result, SbomDeltaError};
use serde::Serialize;
use std::path::Path;

/// An ordered, read-only collection of software entities.
///
/// Iteration order is the document order, which is what makes duplicate
/// path claims resolve deterministically during a diff.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Inventory {
    /// Software entities in document order
    pub software: Vec<SoftwareEntity>,
}

impl Inventory {
    /// Create an inventory from entities
    #[must_use]
    pub const fn new(software: Vec<SoftwareEntity>) -> Self {
        Self { software }
    }

    /// Read an inventory from a JSON document.
    ///
    /// The document must be an object with a `software` array (`null` is
    /// accepted as empty). Other top-level keys are ignored.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        let serde_json::Value::Object(mut root) = value else {
            return Err(SbomDeltaError::parse(
                "inventory document",
                ParseErrorKind::InvalidValue {
                    field: "<root>".to_string(),
                    message: "expected a JSON object".to_string(),
                },
            ));
        };

        let entries = match root.remove("software") {
            None => return Err(SbomDeltaError::missing_field("software", "inventory")),
            Some(serde_json::Value::Null) => Vec::new(),
            Some(serde_json::Value::Array(entries)) => entries,
            Some(other) => {
                return Err(SbomDeltaError::parse(
                    "inventory document",
                    ParseErrorKind::InvalidValue {
                        field: "software".to_string(),
                        message: format!("expected an array, found {}", json_kind(&other)),
                    },
                ))
            }
        };

        let software = entries
            .into_iter()
            .enumerate()
            .map(|(idx, entry)| {
                serde_json::from_value::<SoftwareEntity>(entry)
                    .with_context(|| format!("software[{idx}]"))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { software })
    }

    /// Read an inventory from a file on disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SbomDeltaError::io(path, e))?;
        Self::from_json_str(&content).with_context(|| format!("{}", path.display()))
    }

    /// Number of entities
    #[must_use]
    pub fn len(&self) -> usize {
        self.software.len()
    }

    /// Whether the inventory has no entities
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.software.is_empty()
    }

    /// Iterate entities in document order
    pub fn iter(&self) -> std::slice::Iter<'_, SoftwareEntity> {
        self.software.iter()
    }

    /// Total number of install-path claims (duplicates included)
    #[must_use]
    pub fn path_claims(&self) -> usize {
        self.software.iter().map(|s| s.install_path.len()).sum()
    }
}

impl From<Vec<SoftwareEntity>> for Inventory {
    fn from(software: Vec<SoftwareEntity>) -> Self {
        Self::new(software)
    }
}

impl FromIterator<SoftwareEntity> for Inventory {
    fn from_iter<I: IntoIterator<Item = SoftwareEntity>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a SoftwareEntity;
    type IntoIter = std::slice::Iter<'a, SoftwareEntity>;

    fn into_iter(self) -> Self::IntoIter {
        self.software.iter()
    }
}

const fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
