//! In-memory model of a software inventory.
//!
//! An [`Inventory`] is an ordered list of [`SoftwareEntity`] records, as
//! produced by a CyTRICS-style JSON document. The diff core only reads the
//! install paths and digests; every other field is carried for reporting.

mod entity;
mod inventory;

pub use entity::*;
pub use inventory::*;
