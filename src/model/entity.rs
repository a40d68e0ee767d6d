//! A single software record within an inventory.

use serde::{Deserialize, Deserializer, Serialize};

/// One identified software unit in an inventory.
///
/// Field names follow the CyTRICS JSON layout (`UUID`, `installPath`,
/// `fileName`, ...). Fields this crate does not model are kept in
/// [`SoftwareEntity::extra`] so nothing is lost on a round trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareEntity {
    /// Entity identifier
    #[serde(rename = "UUID", default)]
    pub uuid: String,
    /// Software name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Version string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Vendor names
    #[serde(default, deserialize_with = "null_as_empty")]
    pub vendor: Vec<String>,
    /// File names the unit was observed under
    #[serde(default, deserialize_with = "null_as_empty")]
    pub file_name: Vec<String>,
    /// Filesystem paths at which the unit is installed
    #[serde(default, deserialize_with = "null_as_empty")]
    pub install_path: Vec<String>,
    /// File size in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// SHA-256 digest (hex string, compared verbatim)
    pub sha256: String,
    /// SHA-1 digest
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha1: Option<String>,
    /// MD5 digest
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md5: Option<String>,
    /// Remaining descriptive fields
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl SoftwareEntity {
    /// Create an entity with only a SHA-256 digest
    #[must_use]
    pub fn new(sha256: impl Into<String>) -> Self {
        Self {
            sha256: sha256.into(),
            ..Self::default()
        }
    }

    /// Set the install paths
    #[must_use]
    pub fn with_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.install_path = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Set the UUID
    #[must_use]
    pub fn with_uuid(mut self, uuid: impl Into<String>) -> Self {
        self.uuid = uuid.into();
        self
    }

    /// Set the name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the SHA-1 digest
    #[must_use]
    pub fn with_sha1(mut self, sha1: impl Into<String>) -> Self {
        self.sha1 = Some(sha1.into());
        self
    }

    /// Set the MD5 digest
    #[must_use]
    pub fn with_md5(mut self, md5: impl Into<String>) -> Self {
        self.md5 = Some(md5.into());
        self
    }

    /// Set the file size
    #[must_use]
    pub const fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    /// Short label for log lines: the name if known, otherwise the UUID.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.uuid)
    }
}

/// `installPath: null` and friends appear in real documents; treat them as empty.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
