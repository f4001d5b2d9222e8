// Copyright 2026 the Camembert Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Distinct-value lookups with per-record-set memoization.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};

use crate::record::{Record, RecordSet};

/// Returns the distinct keys of `field` across `records`, in first-seen order.
///
/// Records missing the field contribute nothing. First-seen order is what
/// fixes categorical scale domains, so it must be stable for identical input.
pub fn distinct_keys(records: &[Record], field: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for record in records {
        let Some(value) = record.get(field) else {
            continue;
        };
        let key = value.key().into_owned();
        if seen.insert(key.clone()) {
            out.push(key);
        }
    }
    out
}

/// A per-instance memo of [`distinct_keys`] results.
///
/// Entries are keyed by field name and scoped to one record-set version: any
/// mutation of the backing [`RecordSet`] invalidates the whole cache. Owned by
/// a single logical session; never shared across sessions operating on
/// different data.
#[derive(Debug, Default)]
pub struct DistinctCache {
    version: u64,
    entries: HashMap<String, Vec<String>>,
}

impl DistinctCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            version: 0,
            entries: HashMap::new(),
        }
    }

    /// Returns the distinct keys of `field` in `set`, computing on first use.
    pub fn distinct(&mut self, set: &RecordSet, field: &str) -> &[String] {
        if self.version != set.version() {
            self.entries.clear();
            self.version = set.version();
        }
        if !self.entries.contains_key(field) {
            let keys = distinct_keys(set.records(), field);
            self.entries.insert(String::from(field), keys);
        }
        self.entries.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of memoized fields for the current record set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache currently holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    fn set_abc() -> RecordSet {
        RecordSet::from_records(vec![
            Record::new().with("k", "A"),
            Record::new().with("k", "B"),
            Record::new().with("k", "A"),
            Record::new().with("k", "C"),
        ])
    }

    #[test]
    fn distinct_keys_preserve_first_seen_order() {
        let set = set_abc();
        assert_eq!(distinct_keys(set.records(), "k"), vec!["A", "B", "C"]);
        assert!(distinct_keys(set.records(), "missing").is_empty());
    }

    #[test]
    fn cache_is_invalidated_by_version_bump() {
        let mut set = set_abc();
        let mut cache = DistinctCache::new();

        assert_eq!(cache.distinct(&set, "k"), ["A", "B", "C"]);
        assert_eq!(cache.len(), 1);

        set.push(Record::new().with("k", "D"));
        assert_eq!(cache.distinct(&set, "k"), ["A", "B", "C", "D"]);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn cache_memoizes_per_field() {
        let set = RecordSet::from_records(vec![Record::new().with("a", "x").with("b", "y")]);
        let mut cache = DistinctCache::new();
        assert_eq!(cache.distinct(&set, "a"), ["x"]);
        assert_eq!(cache.distinct(&set, "b"), ["y"]);
        assert_eq!(cache.len(), 2);
    }
}
