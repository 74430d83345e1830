//! # Aggregation Table
//!
//! [`TagTable`] accumulates every distinct value seen for each tag over one
//! run. It is the only stateful piece of the scan and it only ever grows.
//!
//! Two orderings are preserved:
//! - tags appear in the order their first value was recorded,
//! - values under a tag appear in the order they were first observed.
//!
//! Neither is sorted.

use crate::model::TagId;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Default, Clone)]
struct TagValues {
    values: Vec<String>,
    seen: HashSet<String>,
}

#[derive(Debug, Default, Clone)]
pub struct TagTable {
    entries: Vec<(TagId, TagValues)>,
    positions: HashMap<TagId, usize>,
}

impl TagTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one observed value. Returns `true` when the value was new for
    /// this tag.
    ///
    /// Empty values carry no information and are dropped without creating the
    /// tag's entry.
    pub fn record(&mut self, tag: TagId, value: &str) -> bool {
        if value.is_empty() {
            return false;
        }

        let idx = match self.positions.get(&tag) {
            Some(&idx) => idx,
            None => {
                self.entries.push((tag, TagValues::default()));
                let idx = self.entries.len() - 1;
                self.positions.insert(tag, idx);
                idx
            }
        };

        let slot = &mut self.entries[idx].1;
        if slot.seen.contains(value) {
            return false;
        }
        slot.seen.insert(value.to_string());
        slot.values.push(value.to_string());
        true
    }

    /// Values recorded for `tag`, in first-observed order.
    pub fn values(&self, tag: TagId) -> Option<&[String]> {
        self.positions
            .get(&tag)
            .map(|&idx| self.entries[idx].1.values.as_slice())
    }

    /// Iterates tags in first-recorded order.
    pub fn iter(&self) -> impl Iterator<Item = (TagId, &[String])> + '_ {
        self.entries
            .iter()
            .map(|(tag, slot)| (*tag, slot.values.as_slice()))
    }

    /// Number of tags holding at least one value.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of distinct (tag, value) pairs.
    pub fn value_count(&self) -> usize {
        self.entries.iter().map(|(_, slot)| slot.values.len()).sum()
    }
}
