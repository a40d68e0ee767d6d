//! Path-level reconciliation of two inventories.
//!
//! The diff works in two stages:
//!
//! 1. [`PathIndex::build`] maps every normalized install path to the entity
//!    claiming it on each side. Duplicate claims within one inventory resolve
//!    last-write-wins, independently per side.
//! 2. [`PathIndex::reconcile`] walks the index in ascending path order and asks
//!    a [`Comparator`] whether the two entities at a shared path are the same.
//!
//! [`diff`] runs both stages.
//!
//! # Example
//!
//! ```
//! use sbom_delta::diff::{diff, DiffRecord, Sha256Comparator};
//! use sbom_delta::model::{Inventory, SoftwareEntity};
//!
//! let a = Inventory::new(vec![SoftwareEntity::new("111").with_paths(["/a"])]);
//! let b = Inventory::new(vec![SoftwareEntity::new("222").with_paths(["/a"])]);
//!
//! let records = diff(&a, &b, &Sha256Comparator);
//! assert_eq!(records.len(), 1);
//! assert!(matches!(&records[0], DiffRecord::Mismatch { criterion, .. } if criterion == "SHA256"));
//! ```

mod comparator;
mod engine;
mod index;
mod result;

pub use comparator::{
    build_comparator, Comparator, ComparatorKind, Comparison, CriteriaSet, Md5Comparator,
    Sha1Comparator, Sha256Comparator, SizeComparator, MISSING_VALUE,
};
pub use engine::diff;
pub use index::{compare_paths, normalize_path, IndexEntry, PathIndex};
pub use result::{DiffRecord, DiffSummary, Side};
