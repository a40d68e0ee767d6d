//! Reconciliation of a path index into change records.

use super::{Comparator, DiffRecord, PathIndex, Side};
use crate::model::Inventory;

/// Diff two inventories by install path.
///
/// Returns one record per reportable difference, ordered by ascending path.
/// Shared paths whose entities the comparator finds equivalent produce
/// nothing. The result depends only on the inputs.
#[must_use]
pub fn diff<C>(a: &Inventory, b: &Inventory, comparator: &C) -> Vec<DiffRecord>
where
    C: Comparator + ?Sized,
{
    let index = PathIndex::build(a, b);
    let records = index.reconcile(comparator);

    tracing::debug!(
        "Diff via {}: {} paths indexed, {} records",
        comparator.name(),
        index.len(),
        records.len()
    );

    records
}

impl PathIndex<'_> {
    /// Walk the index in path order and emit change records.
    #[must_use]
    pub fn reconcile<C>(&self, comparator: &C) -> Vec<DiffRecord>
    where
        C: Comparator + ?Sized,
    {
        let mut records = Vec::new();

        for (path, entry) in self.iter() {
            match (entry.a, entry.b) {
                (Some(a), Some(b)) => {
                    records.extend(
                        comparator
                            .compare_all(a, b)
                            .into_iter()
                            .filter(|c| !c.equivalent)
                            .map(|c| DiffRecord::Mismatch {
                                path: path.to_string(),
                                criterion: c.criterion,
                                value_a: c.values.0,
                                value_b: c.values.1,
                            }),
                    );
                }
                (Some(_), None) => records.push(DiffRecord::Presence {
                    path: path.to_string(),
                    present_in: Side::A,
                }),
                (None, Some(_)) => records.push(DiffRecord::Presence {
                    path: path.to_string(),
                    present_in: Side::B,
                }),
                (None, None) => unreachable!("index entries always hold at least one entity"),
            }
        }

        records
    }
}
