//! Open-detail selection state.
//!
//! Each view tracks at most one record whose detail modal is open.
//! Selection is independent of filtering: narrowing the list after
//! opening a detail leaves the detail open until explicitly closed.

use labsite_domain::RecordId;

/// At most one currently open record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    current: Option<RecordId>,
}

impl Selection {
    /// No selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a record's detail view. Idempotent for the same record.
    pub fn select(&mut self, id: RecordId) {
        self.current = Some(id);
    }

    /// Open a record, or close it if it is already the open one
    /// (re-triggering a dialog closes it).
    pub fn toggle(&mut self, id: RecordId) {
        if self.current == Some(id) {
            self.current = None;
        } else {
            self.current = Some(id);
        }
    }

    /// Close any open detail view.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// The currently open record, if any.
    pub fn current(&self) -> Option<RecordId> {
        self.current
    }

    /// Whether a detail view is open.
    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_is_idempotent() {
        let mut a = Selection::new();
        a.select(RecordId(3));
        let mut b = a;
        b.select(RecordId(3));
        assert_eq!(a, b);
        assert_eq!(b.current(), Some(RecordId(3)));
    }

    #[test]
    fn select_replaces_previous_selection() {
        let mut sel = Selection::new();
        sel.select(RecordId(1));
        sel.select(RecordId(2));
        assert_eq!(sel.current(), Some(RecordId(2)));
    }

    #[test]
    fn toggle_closes_the_open_record() {
        let mut sel = Selection::new();
        sel.toggle(RecordId(5));
        assert!(sel.is_open());
        sel.toggle(RecordId(5));
        assert!(!sel.is_open());
    }

    #[test]
    fn clear_resets_to_none() {
        let mut sel = Selection::new();
        sel.select(RecordId(0));
        sel.clear();
        assert_eq!(sel.current(), None);
    }
}
