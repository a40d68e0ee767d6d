//! The per-diff path index.

use crate::model::{Inventory, SoftwareEntity};
use indexmap::IndexMap;
use std::cmp::Ordering;

/// The entities claiming one path, one slot per inventory.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexEntry<'a> {
    /// Entity from inventory A, if any claims the path
    pub a: Option<&'a SoftwareEntity>,
    /// Entity from inventory B, if any claims the path
    pub b: Option<&'a SoftwareEntity>,
}

impl IndexEntry<'_> {
    /// Whether both inventories claim the path
    #[must_use]
    pub const fn is_shared(&self) -> bool {
        self.a.is_some() && self.b.is_some()
    }
}

/// Mapping from normalized install path to the entities claiming it.
///
/// Every path claimed by either inventory is a key exactly once, and keys
/// are kept in ascending [`compare_paths`] order once built.
#[derive(Debug, Clone, Default)]
pub struct PathIndex<'a> {
    entries: IndexMap<String, IndexEntry<'a>>,
}

impl<'a> PathIndex<'a> {
    /// Build the index for a pair of inventories.
    ///
    /// Inventory A is walked first, entity by entity and path by path, so a
    /// later A entity overwrites an earlier one at the same path. Inventory B
    /// is then walked the same way, filling (or overwriting) only the B slot.
    #[must_use]
    pub fn build(a: &'a Inventory, b: &'a Inventory) -> Self {
        let mut entries: IndexMap<String, IndexEntry<'a>> =
            IndexMap::with_capacity(a.path_claims().max(b.path_claims()));

        for entity in a {
            for path in &entity.install_path {
                entries.insert(
                    normalize_path(path),
                    IndexEntry {
                        a: Some(entity),
                        b: None,
                    },
                );
            }
        }

        for entity in b {
            for path in &entity.install_path {
                entries
                    .entry(normalize_path(path))
                    .and_modify(|slot| slot.b = Some(entity))
                    .or_insert(IndexEntry {
                        a: None,
                        b: Some(entity),
                    });
            }
        }

        entries.sort_unstable_by(|path_a, _, path_b, _| compare_paths(path_a, path_b));

        tracing::debug!(
            "Built path index: {} paths ({} claims in A, {} in B)",
            entries.len(),
            a.path_claims(),
            b.path_claims()
        );

        Self { entries }
    }

    /// Look up the entry for a path (normalized before lookup)
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&IndexEntry<'a>> {
        self.entries.get(&normalize_path(path))
    }

    /// Number of distinct paths
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether neither inventory claims any path
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in ascending path order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexEntry<'a>)> + '_ {
        self.entries.iter().map(|(path, entry)| (path.as_str(), entry))
    }

    /// Iterate paths in ascending order
    pub fn paths(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }
}

/// Normalize an install path into its index key.
///
/// Repeated separators collapse, `.` components are dropped and a trailing
/// separator is removed. Exactly two leading separators are kept as a
/// distinct root; three or more collapse to one. `..` is kept verbatim since
/// resolving it would need the filesystem. An empty relative path becomes `.`.
#[must_use]
pub fn normalize_path(raw: &str) -> String {
    let joined = raw
        .split('/')
        .filter(|part| !part.is_empty() && *part != ".")
        .collect::<Vec<_>>()
        .join("/");

    match root_of(raw) {
        Some(root) => format!("{root}{joined}"),
        None if joined.is_empty() => ".".to_string(),
        None => joined,
    }
}

/// Order two paths component by component.
///
/// The root (if any) is the first component, so `/etc/foo/bar` sorts before
/// `/etc/foo.conf` even though `.` is below `/` byte-wise.
#[must_use]
pub fn compare_paths(a: &str, b: &str) -> Ordering {
    components(a).cmp(components(b))
}

fn root_of(path: &str) -> Option<&'static str> {
    if path.starts_with("//") && !path.starts_with("///") {
        Some("//")
    } else if path.starts_with('/') {
        Some("/")
    } else {
        None
    }
}

fn components(path: &str) -> impl Iterator<Item = &str> {
    let root: Option<&str> = root_of(path);
    root.into_iter()
        .chain(path.split('/').filter(|part| !part.is_empty() && *part != "."))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(sha: &str, paths: &[&str]) -> SoftwareEntity {
        SoftwareEntity::new(sha).with_paths(paths.iter().copied())
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/usr/bin/ls"), "/usr/bin/ls");
        assert_eq!(normalize_path("/usr//bin/./ls/"), "/usr/bin/ls");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("bin/../ls"), "bin/../ls");
        assert_eq!(normalize_path("./"), ".");
        assert_eq!(normalize_path(""), ".");
        assert_eq!(normalize_path("//srv/x"), "//srv/x");
        assert_eq!(normalize_path("///srv/x"), "/srv/x");
        assert_eq!(normalize_path("//"), "//");
    }

    #[test]
    fn test_compare_paths_is_component_wise() {
        assert_eq!(compare_paths("/etc/foo/bar", "/etc/foo.conf"), Ordering::Less);
        assert_eq!(compare_paths("/a/b", "/a-b"), Ordering::Less);
        assert_eq!(compare_paths("/usr", "/usr/bin"), Ordering::Less);
        assert_eq!(compare_paths("/x", "/x"), Ordering::Equal);
        assert_eq!(compare_paths(".", "bin"), Ordering::Less);
        assert_eq!(compare_paths("/zzz", "//srv"), Ordering::Less);
    }

    #[test]
    fn test_index_keys_follow_component_order() {
        let a = Inventory::new(vec![entity("1", &["/etc/foo.conf", "/etc/foo/bar"])]);
        let b = Inventory::default();

        let index = PathIndex::build(&a, &b);
        let paths: Vec<_> = index.paths().collect();
        assert_eq!(paths, vec!["/etc/foo/bar", "/etc/foo.conf"]);
    }

    #[test]
    fn test_every_path_appears_once() {
        let a = Inventory::new(vec![entity("1", &["/x", "/y"]), entity("2", &["/z"])]);
        let b = Inventory::new(vec![entity("3", &["/y", "/w"])]);

        let index = PathIndex::build(&a, &b);
        let paths: Vec<_> = index.paths().collect();
        assert_eq!(paths, vec!["/w", "/x", "/y", "/z"]);
        assert!(index.get("/y").unwrap().is_shared());
        assert!(index.get("/x").unwrap().b.is_none());
        assert!(index.get("/w").unwrap().a.is_none());
    }

    #[test]
    fn test_last_write_wins_per_side() {
        let a = Inventory::new(vec![entity("first", &["/bin/x"]), entity("second", &["/bin/x"])]);
        let b = Inventory::new(vec![entity("b1", &["/bin/x"]), entity("b2", &["/bin/x"])]);

        let index = PathIndex::build(&a, &b);
        let slot = index.get("/bin/x").unwrap();
        assert_eq!(slot.a.unwrap().sha256, "second");
        assert_eq!(slot.b.unwrap().sha256, "b2");
    }

    #[test]
    fn test_equivalent_spellings_share_a_key() {
        let a = Inventory::new(vec![entity("1", &["/opt//app/"])]);
        let b = Inventory::new(vec![entity("1", &["/opt/app"])]);

        let index = PathIndex::build(&a, &b);
        assert_eq!(index.len(), 1);
        assert!(index.get("/opt/app").unwrap().is_shared());
    }

    #[test]
    fn test_entities_without_paths_contribute_nothing() {
        let a = Inventory::new(vec![entity("1", &[])]);
        let b = Inventory::default();

        assert!(PathIndex::build(&a, &b).is_empty());
    }
}
