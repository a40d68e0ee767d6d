//! File type identification.
//!
//! Identification is a chain of strategies tried in registration order; the
//! first one to return a label wins and later strategies are skipped. The
//! default chain puts the magic-byte matcher ([`MagicIdentifier`]) ahead of
//! the file-extension fallback ([`ExtensionIdentifier`]).
//!
//! Reading a file is the only fallible step, and its failure is folded into
//! "unknown": one unreadable file never aborts a batch.
//!
//! ```
//! use sbom_delta::identify::{identify, FileType};
//!
//! assert_eq!(identify(&[0x4D, 0x5A, 0x90, 0x00]), Some(FileType::Pe));
//! assert_eq!(identify(&[]), None);
//! ```

mod chain;
mod extension;
mod signature;

pub use chain::{identify_file, identify_paths, Identifier, IdentifierChain, Identification};
pub use extension::ExtensionIdentifier;
pub use signature::{identify, MagicIdentifier, SignatureRule, MAGIC_PREFIX_LEN, SIGNATURE_RULES};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Format labels produced by the identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
#[non_exhaustive]
pub enum FileType {
    /// Executable and Linkable Format
    Elf,
    /// Portable Executable (MZ header)
    Pe,
    /// OLE compound file (MSI, MSP, MST, MSM, legacy Office)
    Ole,
    /// Java archive (JAR, WAR, EAR)
    JavaArchive,
    /// Java class file
    JavaClass,
}

impl FileType {
    /// The label used in reports
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Elf => "ELF",
            Self::Pe => "PE",
            Self::Ole => "OLE",
            Self::JavaArchive => "JAVAARCHIVE",
            Self::JavaClass => "JAVACLASS",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
