//! Record filtering by status selector and free-text search.
//!
//! The visible set is always a subsequence of the dataset in original order.
//! Callers recompute it whenever the [`FilterSelection`] changes; nothing here
//! caches or keeps state between calls.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::record::Record;
use crate::status::StatusSelector;

/// Current status button and search text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub status: StatusSelector,
    pub search: String,
}

impl FilterSelection {
    pub fn new(status: StatusSelector, search: impl Into<String>) -> Self {
        Self {
            status,
            search: search.into(),
        }
    }

    /// Returns true if no status or search restriction is active.
    pub fn is_empty(&self) -> bool {
        self.status == StatusSelector::All && self.search.is_empty()
    }

    /// Returns true if the record passes both the status and search predicates.
    pub fn matches(&self, record: &Record) -> bool {
        let needle = self.search.to_lowercase();
        self.status.matches_code(record.status_code()) && matches_search(record, &needle)
    }

    /// Records passing the selection, in dataset order.
    pub fn apply<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        self.visible(records).map(|(_, record)| record).collect()
    }

    /// Dataset indices of the records passing the selection.
    pub fn visible_indices(&self, records: &[Record]) -> Vec<usize> {
        self.visible(records).map(|(idx, _)| idx).collect()
    }

    fn visible<'a>(
        &self,
        records: &'a [Record],
    ) -> impl Iterator<Item = (usize, &'a Record)> + 'a {
        let status = self.status;
        let needle = self.search.to_lowercase();
        records.iter().enumerate().filter(move |(_, record)| {
            status.matches_code(record.status_code()) && matches_search(record, &needle)
        })
    }
}

/// Records matching `status` and `search`, in dataset order.
pub fn filter<'a>(records: &'a [Record], status: StatusSelector, search: &str) -> Vec<&'a Record> {
    let selection = FilterSelection::new(status, search);
    let visible = selection.apply(records);
    debug!(
        status = %status,
        search,
        visible = visible.len(),
        total = records.len(),
        "filtered records"
    );
    visible
}

/// `needle` must already be lower-cased. An empty needle matches everything.
fn matches_search(record: &Record, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    record
        .values()
        .any(|value| value.display_string().to_lowercase().contains(needle))
}
