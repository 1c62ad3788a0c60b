//! Category records exchanged between phone and wearable
//!
//! Two records are the same for merge purposes when both their id and their
//! ranking match. The display name rides along but never takes part in
//! equality or hashing, so a rename on its own does not make a record new.

use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::ids::CategoryId;

/// A category as seen by the sync merge
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRecord {
    /// Stable identity, never reused
    pub category_id: CategoryId,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// Ordinal position in the category list
    pub ranking: i32,
}

impl CategoryRecord {
    pub fn new(category_id: impl Into<CategoryId>, name: impl Into<String>, ranking: i32) -> Self {
        Self {
            category_id: category_id.into(),
            name: name.into(),
            ranking,
        }
    }

    /// A new category with a freshly generated id
    pub fn create(name: impl Into<String>, ranking: i32) -> Self {
        Self::new(CategoryId::generate(), name, ranking)
    }

    /// Move to a new position; the result is a different record for merging
    pub fn rerank(&mut self, ranking: i32) {
        self.ranking = ranking;
    }
}

impl PartialEq for CategoryRecord {
    fn eq(&self, other: &Self) -> bool {
        self.category_id == other.category_id && self.ranking == other.ranking
    }
}

impl Eq for CategoryRecord {}

impl Hash for CategoryRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must cover exactly the fields compared in `eq`.
        self.category_id.hash(state);
        self.ranking.hash(state);
    }
}

impl fmt::Display for CategoryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} ({})", self.ranking, self.name, self.category_id)
    }
}

/// Equality and hash for category records, including absent operands
///
/// For merge routines that hold optional records. Absent equals only
/// absent; the same reference is always equal to itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryEquivalence;

impl CategoryEquivalence {
    pub fn equals(a: Option<&CategoryRecord>, b: Option<&CategoryRecord>) -> bool {
        match (a, b) {
            (Some(a), Some(b)) => std::ptr::eq(a, b) || a == b,
            (None, None) => true,
            _ => false,
        }
    }

    /// Deterministic combination of id and ranking
    pub fn hash(record: &CategoryRecord) -> u64 {
        let mut hasher = DefaultHasher::new();
        record.hash(&mut hasher);
        hasher.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn samples() -> Vec<CategoryRecord> {
        vec![
            CategoryRecord::new("7", "Work", 2),
            CategoryRecord::new("7", "Work", 3),
            CategoryRecord::new("7", "Office", 2),
            CategoryRecord::new("8", "Work", 2),
            CategoryRecord::new("", "", 0),
        ]
    }

    #[test]
    fn test_reflexive() {
        for record in samples() {
            assert!(CategoryEquivalence::equals(Some(&record), Some(&record)));
            assert_eq!(record, record.clone());
        }
    }

    #[test]
    fn test_symmetric() {
        let records = samples();
        for a in &records {
            for b in &records {
                assert_eq!(
                    CategoryEquivalence::equals(Some(a), Some(b)),
                    CategoryEquivalence::equals(Some(b), Some(a))
                );
            }
        }
    }

    #[test]
    fn test_transitive() {
        let records = samples();
        for a in &records {
            for b in &records {
                for c in &records {
                    if a == b && b == c {
                        assert_eq!(a, c);
                    }
                }
            }
        }
    }

    #[test]
    fn test_equal_records_hash_equal() {
        let records = samples();
        for a in &records {
            for b in &records {
                if a == b {
                    assert_eq!(CategoryEquivalence::hash(a), CategoryEquivalence::hash(b));
                }
            }
        }
    }

    #[test]
    fn test_ranking_change_breaks_equality() {
        let before = CategoryRecord::new("7", "Work", 2);
        let mut after = before.clone();
        after.rerank(3);

        assert_ne!(before, after);
        assert!(!CategoryEquivalence::equals(Some(&before), Some(&after)));
    }

    #[test]
    fn test_name_is_not_part_of_identity() {
        let a = CategoryRecord::new("7", "Work", 2);
        let b = CategoryRecord::new("7", "Office", 2);
        assert_eq!(a, b);
        assert_eq!(CategoryEquivalence::hash(&a), CategoryEquivalence::hash(&b));
    }

    #[test]
    fn test_absent_operands() {
        let record = CategoryRecord::new("7", "Work", 2);
        assert!(CategoryEquivalence::equals(None, None));
        assert!(!CategoryEquivalence::equals(Some(&record), None));
        assert!(!CategoryEquivalence::equals(None, Some(&record)));
    }

    #[test]
    fn test_hash_is_deterministic() {
        let a = CategoryRecord::new("7", "Work", 2);
        let b = CategoryRecord::new("7", "Work", 2);
        assert_eq!(CategoryEquivalence::hash(&a), CategoryEquivalence::hash(&a));
        assert_eq!(CategoryEquivalence::hash(&a), CategoryEquivalence::hash(&b));
    }

    #[test]
    fn test_reranked_records_do_not_collide_in_set() {
        let mut set = HashSet::new();
        set.insert(CategoryRecord::new("7", "Work", 2));
        set.insert(CategoryRecord::new("7", "Work", 3));
        set.insert(CategoryRecord::new("7", "Renamed", 3));

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_serialization_uses_camel_case() {
        let record = CategoryRecord::new("7", "Work", 2);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"categoryId":"7","name":"Work","ranking":2}"#);

        let parsed: CategoryRecord =
            serde_json::from_str(r#"{"categoryId":"7","ranking":2}"#).unwrap();
        assert_eq!(parsed, record);
        assert!(parsed.name.is_empty());
    }
}
