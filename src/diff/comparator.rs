//! Pluggable equivalence checks for entities sharing a path.
//!
//! A [`Comparator`] decides whether two entities found at the same path are
//! "the same" and names the criterion it used. The differ never looks inside
//! entities itself, so any implementation (a struct, a closure, or a
//! [`CriteriaSet`] of several) can be swapped in.

use crate::model::SoftwareEntity;
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Rendered in place of a digest or size an entity does not carry.
pub const MISSING_VALUE: &str = "MISSING";

/// Outcome of comparing two entities under one criterion.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Comparison {
    /// Whether the entities are equivalent under this criterion
    pub equivalent: bool,
    /// Criterion name shown in reports (e.g. `SHA256`)
    pub criterion: String,
    /// The observed values, A first
    pub values: (String, String),
}

impl Comparison {
    /// Create a comparison result
    pub fn new(
        equivalent: bool,
        criterion: impl Into<String>,
        value_a: impl Into<String>,
        value_b: impl Into<String>,
    ) -> Self {
        Self {
            equivalent,
            criterion: criterion.into(),
            values: (value_a.into(), value_b.into()),
        }
    }

    /// Compare two required values verbatim
    pub fn of_values(criterion: impl Into<String>, a: &str, b: &str) -> Self {
        Self::new(a == b, criterion, a, b)
    }

    /// Compare two optional values.
    ///
    /// A missing value on either side is never equivalent, even when both
    /// are missing.
    pub fn of_optional(criterion: impl Into<String>, a: Option<&str>, b: Option<&str>) -> Self {
        let equivalent = matches!((a, b), (Some(a), Some(b)) if a == b);
        Self::new(
            equivalent,
            criterion,
            a.unwrap_or(MISSING_VALUE),
            b.unwrap_or(MISSING_VALUE),
        )
    }
}

/// Trait for entity equivalence strategies.
///
/// # Example
///
/// ```
/// use sbom_delta::diff::{Comparator, Comparison};
/// use sbom_delta::model::SoftwareEntity;
///
/// let by_name = |a: &SoftwareEntity, b: &SoftwareEntity| {
///     Comparison::of_optional("NAME", a.name.as_deref(), b.name.as_deref())
/// };
///
/// let a = SoftwareEntity::new("00").with_name("ls");
/// let b = SoftwareEntity::new("ff").with_name("ls");
/// assert!(by_name.compare(&a, &b).equivalent);
/// ```
pub trait Comparator: Send + Sync {
    /// Compare two entities under this comparator's criterion.
    fn compare(&self, a: &SoftwareEntity, b: &SoftwareEntity) -> Comparison;

    /// Compare under every criterion this comparator checks.
    ///
    /// Each non-equivalent entry becomes its own mismatch record, so
    /// multi-criteria comparators override this.
    fn compare_all(&self, a: &SoftwareEntity, b: &SoftwareEntity) -> Vec<Comparison> {
        vec![self.compare(a, b)]
    }

    /// Get the name of this comparator for logging.
    fn name(&self) -> &str {
        "Comparator"
    }
}

impl<F> Comparator for F
where
    F: Fn(&SoftwareEntity, &SoftwareEntity) -> Comparison + Send + Sync,
{
    fn compare(&self, a: &SoftwareEntity, b: &SoftwareEntity) -> Comparison {
        self(a, b)
    }

    fn name(&self) -> &str {
        "closure"
    }
}

/// Equivalence by exact SHA-256 digest string. The default comparator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Comparator;

impl Comparator for Sha256Comparator {
    fn compare(&self, a: &SoftwareEntity, b: &SoftwareEntity) -> Comparison {
        Comparison::of_values("SHA256", &a.sha256, &b.sha256)
    }

    fn name(&self) -> &str {
        "sha256"
    }
}

/// Equivalence by SHA-1 digest.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha1Comparator;

impl Comparator for Sha1Comparator {
    fn compare(&self, a: &SoftwareEntity, b: &SoftwareEntity) -> Comparison {
        Comparison::of_optional("SHA1", a.sha1.as_deref(), b.sha1.as_deref())
    }

    fn name(&self) -> &str {
        "sha1"
    }
}

/// Equivalence by MD5 digest.
#[derive(Debug, Clone, Copy, Default)]
pub struct Md5Comparator;

impl Comparator for Md5Comparator {
    fn compare(&self, a: &SoftwareEntity, b: &SoftwareEntity) -> Comparison {
        Comparison::of_optional("MD5", a.md5.as_deref(), b.md5.as_deref())
    }

    fn name(&self) -> &str {
        "md5"
    }
}

/// Equivalence by recorded file size.
#[derive(Debug, Clone, Copy, Default)]
pub struct SizeComparator;

impl Comparator for SizeComparator {
    fn compare(&self, a: &SoftwareEntity, b: &SoftwareEntity) -> Comparison {
        let size_a = a.size.map(|s| s.to_string());
        let size_b = b.size.map(|s| s.to_string());
        Comparison::of_optional("SIZE", size_a.as_deref(), size_b.as_deref())
    }

    fn name(&self) -> &str {
        "size"
    }
}

/// Several comparators checked together, in insertion order.
///
/// `compare_all` yields one comparison per member, so an entity pair that
/// differs in two criteria produces two mismatch records.
#[derive(Default)]
pub struct CriteriaSet {
    members: Vec<Box<dyn Comparator>>,
}

impl CriteriaSet {
    /// Create an empty set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a comparator
    #[must_use]
    pub fn with(mut self, comparator: impl Comparator + 'static) -> Self {
        self.members.push(Box::new(comparator));
        self
    }

    /// Append a boxed comparator
    pub fn push(&mut self, comparator: Box<dyn Comparator>) {
        self.members.push(comparator);
    }

    /// Number of member comparators
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the set has no members
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Comparator for CriteriaSet {
    /// The first failing criterion, or an equivalent result naming all of them.
    fn compare(&self, a: &SoftwareEntity, b: &SoftwareEntity) -> Comparison {
        let all = self.compare_all(a, b);
        let criteria = all
            .iter()
            .map(|c| c.criterion.as_str())
            .collect::<Vec<_>>()
            .join("+");
        all.into_iter()
            .find(|c| !c.equivalent)
            .unwrap_or_else(|| Comparison::new(true, criteria, "", ""))
    }

    fn compare_all(&self, a: &SoftwareEntity, b: &SoftwareEntity) -> Vec<Comparison> {
        self.members.iter().map(|m| m.compare(a, b)).collect()
    }

    fn name(&self) -> &str {
        "criteria-set"
    }
}

impl std::fmt::Debug for CriteriaSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.members.iter().map(|m| m.name()))
            .finish()
    }
}

/// Built-in comparators selectable from the CLI and config file.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ComparatorKind {
    /// SHA-256 digest (default)
    Sha256,
    /// SHA-1 digest
    Sha1,
    /// MD5 digest
    Md5,
    /// Recorded file size
    Size,
}

impl ComparatorKind {
    fn boxed(self) -> Box<dyn Comparator> {
        match self {
            Self::Sha256 => Box::new(Sha256Comparator),
            Self::Sha1 => Box::new(Sha1Comparator),
            Self::Md5 => Box::new(Md5Comparator),
            Self::Size => Box::new(SizeComparator),
        }
    }
}

impl std::fmt::Display for ComparatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sha256 => write!(f, "sha256"),
            Self::Sha1 => write!(f, "sha1"),
            Self::Md5 => write!(f, "md5"),
            Self::Size => write!(f, "size"),
        }
    }
}

/// Build a comparator from a list of built-in kinds.
///
/// An empty list means SHA-256; a single kind is used directly; several
/// kinds become a [`CriteriaSet`] in the given order, duplicates dropped.
#[must_use]
pub fn build_comparator(kinds: &[ComparatorKind]) -> Box<dyn Comparator> {
    let mut unique: Vec<ComparatorKind> = Vec::with_capacity(kinds.len());
    for kind in kinds {
        if !unique.contains(kind) {
            unique.push(*kind);
        }
    }

    match unique.as_slice() {
        [] => Box::new(Sha256Comparator),
        [single] => single.boxed(),
        many => {
            let mut set = CriteriaSet::new();
            for kind in many {
                set.push(kind.boxed());
            }
            Box::new(set)
        }
    }
}
