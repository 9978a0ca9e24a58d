//! Filter predicates for content lists.
//!
//! A filter combines a free-text search term with a set of selected
//! facets (topic tags, or a single role on the People view) into one
//! boolean predicate. Evaluation is pure: same inputs, same answer,
//! no side effects.

use labsite_domain::{Record, Role};
use serde::{Deserialize, Serialize};

/// A combined filter for record lists.
///
/// - The search clause is case-insensitive substring containment over
///   the record's searchable fields; an empty or whitespace-only term
///   matches everything.
/// - The facet clause uses OR semantics: with facets selected, a record
///   matches if it carries at least one of them; with none selected,
///   everything matches.
/// - The final predicate is the AND of both clauses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordFilter {
    /// Free-text search term, matched case-insensitively.
    pub search_term: String,
    /// Selected facet values (OR semantics, exact string match).
    pub selected_facets: Vec<String>,
}

impl RecordFilter {
    /// A filter that matches everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the search term.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Builder method to set the selected facets.
    pub fn with_facets(mut self, facets: Vec<String>) -> Self {
        self.selected_facets = facets;
        self
    }

    /// Toggle a facet: select it if unselected, deselect it otherwise.
    pub fn toggle_facet(&mut self, facet: &str) {
        if let Some(pos) = self.selected_facets.iter().position(|f| f == facet) {
            self.selected_facets.remove(pos);
        } else {
            self.selected_facets.push(facet.to_string());
        }
    }

    /// Whether this filter matches everything.
    pub fn is_empty(&self) -> bool {
        self.search_term.trim().is_empty() && self.selected_facets.is_empty()
    }

    /// Evaluate the filter against a record.
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        self.matches_search(record) && self.matches_facets(record)
    }

    fn matches_search<R: Record>(&self, record: &R) -> bool {
        let term = self.search_term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }

    fn matches_facets<R: Record>(&self, record: &R) -> bool {
        if self.selected_facets.is_empty() {
            return true;
        }
        let values = record.facet_values();
        self.selected_facets
            .iter()
            .any(|facet| values.contains(&facet.as_str()))
    }
}

/// Single-select role filter for the People view.
///
/// Unlike facet selection this is exact-match on one role label, with
/// an `All` sentinel that matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoleFilter {
    #[default]
    All,
    Only(String),
}

impl RoleFilter {
    /// Label of the match-everything sentinel.
    pub const ALL_LABEL: &'static str = "All";

    /// Parse a filter from a dropdown label.
    pub fn from_label(label: &str) -> Self {
        if label == Self::ALL_LABEL {
            RoleFilter::All
        } else {
            RoleFilter::Only(label.to_string())
        }
    }

    /// The label shown in the dropdown.
    pub fn label(&self) -> &str {
        match self {
            RoleFilter::All => Self::ALL_LABEL,
            RoleFilter::Only(label) => label,
        }
    }

    /// The dropdown options: `All` followed by the known role labels.
    pub fn options() -> Vec<&'static str> {
        let mut options = vec![Self::ALL_LABEL];
        options.extend(Role::KNOWN_LABELS);
        options
    }

    /// Evaluate the filter against a role.
    pub fn matches(&self, role: &Role) -> bool {
        match self {
            RoleFilter::All => true,
            RoleFilter::Only(label) => role.label() == label,
        }
    }
}
