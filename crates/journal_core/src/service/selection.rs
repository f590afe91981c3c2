//! Single-select life-event association for one quick-log session.
//!
//! # Invariants
//! - At most one id is selected at any time.
//! - `toggle(x)` twice in a row restores the prior state when that state was
//!   none or `x`; from another selection `y` it ends at none.

use crate::model::life_event::LifeEventId;

/// Zero-or-one life-event choice with toggle semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LifeEventSelection {
    selected: Option<LifeEventId>,
}

impl LifeEventSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deselects `id` when it is current, otherwise replaces the selection.
    pub fn toggle(&mut self, id: &str) -> Option<&str> {
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        } else {
            self.selected = Some(id.to_string());
        }
        self.current()
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn current(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.current() == Some(id)
    }
}
