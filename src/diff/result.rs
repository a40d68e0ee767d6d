//! Change records produced by a diff.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which inventory a record refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The first (baseline) inventory
    A,
    /// The second inventory
    B,
}

impl Side {
    /// The opposite side
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}

/// One reportable difference at a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiffRecord {
    /// Both inventories claim the path but a criterion disagrees
    Mismatch {
        path: String,
        criterion: String,
        value_a: String,
        value_b: String,
    },
    /// Only one inventory claims the path
    Presence { path: String, present_in: Side },
}

impl DiffRecord {
    /// The path this record is about
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Mismatch { path, .. } | Self::Presence { path, .. } => path,
        }
    }

    /// Whether the given side has an entity at this path
    #[must_use]
    pub fn is_present_in(&self, side: Side) -> bool {
        match self {
            Self::Mismatch { .. } => true,
            Self::Presence { present_in, .. } => *present_in == side,
        }
    }
}

/// Counts over a list of diff records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    /// Mismatch records
    pub mismatches: usize,
    /// Paths present only in A
    pub only_in_a: usize,
    /// Paths present only in B
    pub only_in_b: usize,
    /// All records
    pub total: usize,
}

impl DiffSummary {
    /// Tally a record list
    #[must_use]
    pub fn from_records(records: &[DiffRecord]) -> Self {
        let mut summary = Self::default();
        for record in records {
            match record {
                DiffRecord::Mismatch { .. } => summary.mismatches += 1,
                DiffRecord::Presence {
                    present_in: Side::A,
                    ..
                } => summary.only_in_a += 1,
                DiffRecord::Presence {
                    present_in: Side::B,
                    ..
                } => summary.only_in_b += 1,
            }
        }
        summary.total = records.len();
        summary
    }

    /// Whether any difference was found
    #[must_use]
    pub const fn has_changes(&self) -> bool {
        self.total > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts() {
        let records = vec![
            DiffRecord::Mismatch {
                path: "/a".into(),
                criterion: "SHA256".into(),
                value_a: "1".into(),
                value_b: "2".into(),
            },
            DiffRecord::Presence {
                path: "/b".into(),
                present_in: Side::A,
            },
            DiffRecord::Presence {
                path: "/c".into(),
                present_in: Side::B,
            },
        ];

        let summary = DiffSummary::from_records(&records);
        assert_eq!(summary.mismatches, 1);
        assert_eq!(summary.only_in_a, 1);
        assert_eq!(summary.only_in_b, 1);
        assert_eq!(summary.total, 3);
        assert!(summary.has_changes());
        assert!(!DiffSummary::default().has_changes());
    }

    #[test]
    fn test_record_serializes_with_kind_tag() {
        let record = DiffRecord::Presence {
            path: "/a".into(),
            present_in: Side::B,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["kind"], "presence");
        assert_eq!(json["present_in"], "B");
        assert!(record.is_present_in(Side::B));
        assert!(!record.is_present_in(Side::B.other()));
    }
}
