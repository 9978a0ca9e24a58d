//! Versioned in-memory record store with a stable query executor.

use crate::filter::RecordFilter;
use labsite_domain::{Record, RecordId};

/// The record collection backing one content view.
///
/// Populated once at startup from the bundled data files and immutable
/// for the lifetime of a page view; `reload` exists for the (rare) case
/// the underlying data changes and bumps the version so memoized
/// derivations like the facet catalog know to recompute.
#[derive(Debug, Clone)]
pub struct RecordStore<T> {
    records: Vec<T>,
    version: u64,
}

impl<T> RecordStore<T> {
    /// Create a store over a loaded record sequence.
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records,
            version: 1,
        }
    }

    /// Replace the record sequence, invalidating memoized derivations.
    pub fn reload(&mut self, records: Vec<T>) {
        self.records = records;
        self.version += 1;
    }

    /// Version counter, bumped on every reload. Used as the cache key
    /// for derived data.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Number of records in the store (unfiltered).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The full record sequence in loaded order.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Look up a record by its positional id.
    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.records.get(id.0)
    }

    /// Stable filter with an arbitrary predicate; relative order of the
    /// loaded sequence is preserved.
    pub fn query_with<'a>(&'a self, predicate: impl Fn(&T) -> bool) -> Vec<&'a T> {
        self.records.iter().filter(|r| predicate(r)).collect()
    }

    /// As `query_with`, but pairing each match with its positional id
    /// so callers can feed selections back to `get`.
    pub fn query_indexed<'a>(
        &'a self,
        predicate: impl Fn(&T) -> bool,
    ) -> Vec<(RecordId, &'a T)> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, r)| predicate(r))
            .map(|(i, r)| (RecordId(i), r))
            .collect()
    }
}

impl<T: Record> RecordStore<T> {
    /// Apply a filter, preserving loaded order. Returns an empty vec
    /// (never an error) when nothing matches.
    pub fn query<'a>(&'a self, filter: &RecordFilter) -> Vec<&'a T> {
        self.query_with(|r| filter.matches(r))
    }

    /// Count matches without collecting them.
    pub fn count(&self, filter: &RecordFilter) -> usize {
        self.records.iter().filter(|r| filter.matches(*r)).count()
    }
}
