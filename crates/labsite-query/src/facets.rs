//! Memoized facet catalog for filter UIs.
//!
//! The selectable facet values offered by a view are the union of
//! facet values across the ENTIRE unfiltered store, so the options
//! never shrink when a filter narrows the list. The catalog is keyed on
//! the store's version counter and recomputed only on (re)load, never
//! per keystroke.

use crate::store::RecordStore;
use labsite_domain::Record;

/// Distinct facet values of a record sequence, first-seen order.
pub fn distinct_facets<T: Record>(records: &[T]) -> Vec<String> {
    let mut facets: Vec<String> = Vec::new();
    for record in records {
        for value in record.facet_values() {
            if !facets.iter().any(|f| f == value) {
                facets.push(value.to_string());
            }
        }
    }
    facets
}

/// Cache of a store's facet values, invalidated by version.
#[derive(Debug, Clone, Default)]
pub struct FacetCatalog {
    cached_version: u64,
    facets: Vec<String>,
}

impl FacetCatalog {
    /// An empty catalog; the first `facets` call populates it.
    pub fn new() -> Self {
        Self::default()
    }

    /// The facet values for the store's current contents, recomputing
    /// only when the store version changed since the last call.
    pub fn facets<T: Record>(&mut self, store: &RecordStore<T>) -> &[String] {
        if self.cached_version != store.version() {
            self.facets = distinct_facets(store.records());
            self.cached_version = store.version();
        }
        &self.facets
    }
}
