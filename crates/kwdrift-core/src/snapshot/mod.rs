//! Snapshot model: a mapping from keyword name to its documentation record.
//!
//! Collections use `BTreeMap` for deterministic iteration and serialization;
//! sorted name order is the canonical iteration order for both the reference
//! and the persisted snapshot, which fixes the row ordering of drift reports.

pub mod record;

pub use record::{KeywordRecord, INIT_PSEUDO_KEYWORD, INTRO_PSEUDO_KEYWORD};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A mapping from keyword name to [`KeywordRecord`], keys unique.
///
/// The reference snapshot is computed fresh on every invocation; the
/// persisted snapshot is read once from a translation file. Neither is
/// mutated or written back by this crate.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Snapshot(BTreeMap<String, KeywordRecord>);

impl Snapshot {
    pub fn new() -> Self {
        Snapshot(BTreeMap::new())
    }

    /// Insert a record under its own name. Replaces any existing entry.
    pub fn insert(&mut self, record: KeywordRecord) {
        self.0.insert(record.name.clone(), record);
    }

    pub fn get(&self, name: &str) -> Option<&KeywordRecord> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Iterate records in sorted name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &KeywordRecord)> {
        self.0.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Length of the longest keyword name, 0 for an empty snapshot.
    pub fn max_name_len(&self) -> usize {
        self.0.keys().map(|name| name.len()).max().unwrap_or(0)
    }
}

impl FromIterator<KeywordRecord> for Snapshot {
    fn from_iter<I: IntoIterator<Item = KeywordRecord>>(iter: I) -> Self {
        let mut snapshot = Snapshot::new();
        for record in iter {
            snapshot.insert(record);
        }
        snapshot
    }
}
