//! File-extension fallback identifier.

use super::{FileType, Identifier};
use std::path::Path;

/// Extensions (lowercase, without the dot) and the label each implies.
const EXTENSION_TABLE: &[(&str, FileType)] = &[
    ("jar", FileType::JavaArchive),
    ("war", FileType::JavaArchive),
    ("ear", FileType::JavaArchive),
    ("class", FileType::JavaClass),
    ("msi", FileType::Ole),
    ("msp", FileType::Ole),
    ("mst", FileType::Ole),
    ("msm", FileType::Ole),
    ("exe", FileType::Pe),
    ("dll", FileType::Pe),
    ("sys", FileType::Pe),
    ("so", FileType::Elf),
];

/// Identifier that looks only at the file name.
///
/// It never reads the file, so it still answers when the prefix is empty.
/// Registered after [`MagicIdentifier`](super::MagicIdentifier) so leading
/// bytes always win.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtensionIdentifier;

impl ExtensionIdentifier {
    /// Look up a path's extension, case-insensitively
    #[must_use]
    pub fn identify_path(path: &Path) -> Option<FileType> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        EXTENSION_TABLE
            .iter()
            .find(|(known, _)| *known == ext)
            .map(|(_, file_type)| *file_type)
    }
}

impl Identifier for ExtensionIdentifier {
    fn identify(&self, path: &Path, _prefix: &[u8]) -> Option<FileType> {
        Self::identify_path(path)
    }

    fn name(&self) -> &'static str {
        "extension"
    }
}
