//! Diff computation stage.

use crate::config::DiffSettings;
use crate::diff::{build_comparator, diff, DiffRecord, DiffSummary};
use crate::model::Inventory;

/// Run the reconciliation between two inventories with the configured
/// comparators, returning the records and the comparator's name.
pub fn compute_diff(
    settings: &DiffSettings,
    a: &Inventory,
    b: &Inventory,
    quiet: bool,
) -> (Vec<DiffRecord>, String) {
    let comparator = build_comparator(&settings.comparators);

    if !quiet {
        tracing::info!("Reconciling inventories using {} comparator", comparator.name());
    }

    let records = diff(a, b, comparator.as_ref());

    if !quiet {
        let summary = DiffSummary::from_records(&records);
        tracing::info!(
            "{} differences: {} mismatched, {} only in A, {} only in B",
            summary.total,
            summary.mismatches,
            summary.only_in_a,
            summary.only_in_b
        );
    }

    (records, comparator.name().to_string())
}
