//! **Path-level reconciliation of software inventories, plus binary signature identification.**
//!
//! `sbom-delta` answers two questions about a system's software bill of materials:
//!
//! - **What changed?** Given two inventory snapshots, the [`diff`] module reports every
//!   install path whose content differs, or which exists on only one side.
//! - **What is this file?** Given a file, the [`identify`] module classifies it (ELF, PE,
//!   OLE, ...) from its leading bytes, the first step before any per-format analysis.
//!
//! Both are pure and synchronous; the classifier does at most one bounded read per file.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: [`SoftwareEntity`] and [`Inventory`], plus a reader for CyTRICS-style
//!   JSON inventory documents.
//! - **[`diff`]**: the [`PathIndex`] that joins two inventories on normalized install
//!   paths, the [`Comparator`] trait that decides whether two entities at a path are the
//!   same, and the [`diff()`](diff::diff) function that produces [`DiffRecord`]s in
//!   ascending path order.
//! - **[`identify`]**: the reference signature table, and an [`IdentifierChain`] of
//!   strategies tried in registration order.
//! - **[`reports`]**: text and JSON renderings of diff and identification results.
//! - **[`config`]**, **[`pipeline`]**, **[`cli`]**: the layers behind the `sbom-delta`
//!   binary.
//!
//! ## Diffing Two Inventories
//!
//! ```no_run
//! use std::path::Path;
//! use sbom_delta::{diff, Inventory, Sha256Comparator};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let a = Inventory::from_path(Path::new("before.json"))?;
//!     let b = Inventory::from_path(Path::new("after.json"))?;
//!
//!     for record in diff::diff(&a, &b, &Sha256Comparator) {
//!         println!("{}", record.path());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Identifying Files
//!
//! ```
//! use sbom_delta::identify::{identify, FileType};
//!
//! assert_eq!(identify(b"\x7fELF\x02\x01\x01\x00"), Some(FileType::Elf));
//! assert_eq!(identify(b"MZ\x90\x00"), Some(FileType::Pe));
//! assert_eq!(identify(b""), None);
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Doc completeness: # Errors / # Panics sections are not written for every fn
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // `a`/`b` pairs are clear in context
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod identify;
pub mod model;
pub mod pipeline;
pub mod reports;

// Re-export main types for convenience
pub use config::{AppConfig, ConfigError, DiffConfig, IdentifyConfig, OutputConfig, Validatable};
pub use diff::{
    build_comparator, Comparator, ComparatorKind, Comparison, CriteriaSet, DiffRecord,
    DiffSummary, PathIndex, Sha256Comparator, Side,
};
pub use error::{ErrorContext, Result, SbomDeltaError};
pub use identify::{identify_file, FileType, Identification, Identifier, IdentifierChain};
pub use model::{Inventory, SoftwareEntity};
pub use reports::{create_reporter, ReportFormat, ReportGenerator};
