//! Per-view owned state.
//!
//! Each content view owns its filter and selection state exclusively;
//! there is no cross-view sharing. Navigating away resets the state.

use crate::filter::{RecordFilter, RoleFilter};
use crate::selection::Selection;

/// State owned by the Research and Publications views.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub filter: RecordFilter,
    pub selection: Selection,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset on navigation away from the view.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// State owned by the People view, which adds the single-select role
/// dropdown to the common search box.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeopleViewState {
    pub filter: RecordFilter,
    pub role: RoleFilter,
    pub selection: Selection,
}

impl PeopleViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset on navigation away from the view.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
