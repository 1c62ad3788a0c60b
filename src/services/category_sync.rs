//! Reconciling category lists between phone and wearable
//!
//! All comparisons go through `CategoryRecord`'s equivalence: id plus
//! ranking. A re-ranked category therefore shows up as one removal and one
//! addition, which is what the wearable needs to redraw its list order.

use std::collections::HashSet;

use tracing::debug;

use crate::models::CategoryRecord;

/// What changed between a local and a remote category list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryDiff {
    /// Present remotely but not locally, in remote order
    pub added: Vec<CategoryRecord>,
    /// Present locally but not remotely, in local order
    pub removed: Vec<CategoryRecord>,
}

impl CategoryDiff {
    /// Compare `local` against `remote`
    pub fn between(local: &[CategoryRecord], remote: &[CategoryRecord]) -> Self {
        let local_set: HashSet<&CategoryRecord> = local.iter().collect();
        let remote_set: HashSet<&CategoryRecord> = remote.iter().collect();

        let diff = Self {
            added: distinct_missing(remote, &local_set),
            removed: distinct_missing(local, &remote_set),
        };
        debug!(
            added = diff.added.len(),
            removed = diff.removed.len(),
            "computed category diff"
        );
        diff
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Items of `list` absent from `other`, first occurrence only
fn distinct_missing(
    list: &[CategoryRecord],
    other: &HashSet<&CategoryRecord>,
) -> Vec<CategoryRecord> {
    let mut seen = HashSet::new();
    list.iter()
        .filter(|record| !other.contains(record) && seen.insert(*record))
        .cloned()
        .collect()
}

/// Whether a cached list must be replaced by an incoming one
///
/// Order-sensitive: the same records in a different order still differ.
pub fn needs_refresh(cached: &[CategoryRecord], incoming: &[CategoryRecord]) -> bool {
    cached != incoming
}

/// Union of two lists with equivalent records collapsed, ordered by ranking
///
/// When two equivalent records disagree on name, the one from `local` wins.
pub fn merge(local: &[CategoryRecord], remote: &[CategoryRecord]) -> Vec<CategoryRecord> {
    let mut seen = HashSet::new();
    let mut merged: Vec<CategoryRecord> = local
        .iter()
        .chain(remote.iter())
        .filter(|record| seen.insert(*record))
        .cloned()
        .collect();

    merged.sort_by(|a, b| {
        a.ranking
            .cmp(&b.ranking)
            .then_with(|| a.category_id.cmp(&b.category_id))
    });
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, name: &str, ranking: i32) -> CategoryRecord {
        CategoryRecord::new(id, name, ranking)
    }

    #[test]
    fn test_identical_lists_have_empty_diff() {
        let list = vec![record("1", "Work", 0), record("2", "Home", 1)];
        let diff = CategoryDiff::between(&list, &list.clone());
        assert!(diff.is_empty());
        assert!(!needs_refresh(&list, &list.clone()));
    }

    #[test]
    fn test_rerank_is_remove_plus_add() {
        let local = vec![record("7", "Work", 2)];
        let remote = vec![record("7", "Work", 3)];

        let diff = CategoryDiff::between(&local, &remote);
        assert_eq!(diff.added, vec![record("7", "Work", 3)]);
        assert_eq!(diff.removed, vec![record("7", "Work", 2)]);
    }

    #[test]
    fn test_rename_alone_is_not_a_change() {
        let local = vec![record("7", "Work", 2)];
        let remote = vec![record("7", "Office", 2)];

        assert!(CategoryDiff::between(&local, &remote).is_empty());
        assert!(!needs_refresh(&local, &remote));
    }

    #[test]
    fn test_diff_deduplicates_repeated_records() {
        let local: Vec<CategoryRecord> = Vec::new();
        let remote = vec![record("1", "A", 0), record("1", "A", 0), record("2", "B", 1)];

        let diff = CategoryDiff::between(&local, &remote);
        assert_eq!(diff.added.len(), 2);
        assert!(diff.removed.is_empty());
    }

    #[test]
    fn test_needs_refresh_is_order_sensitive() {
        let a = vec![record("1", "A", 0), record("2", "B", 1)];
        let b = vec![record("2", "B", 1), record("1", "A", 0)];
        assert!(needs_refresh(&a, &b));
        assert!(needs_refresh(&a, &a[..1]));
    }

    #[test]
    fn test_merge_keeps_both_rankings_of_same_id() {
        let local = vec![record("7", "Work", 2), record("1", "Home", 0)];
        let remote = vec![record("7", "Work", 3), record("1", "Home remote", 0)];

        let merged = merge(&local, &remote);
        assert_eq!(
            merged,
            vec![record("1", "Home", 0), record("7", "Work", 2), record("7", "Work", 3)]
        );
        assert_eq!(merged[0].name, "Home");
    }
}
