//! Description expansion flags

use crate::catalog::ProductId;
use std::collections::HashSet;

/// Which product descriptions are currently shown in full.
///
/// Only expanded ids are stored; an id that is absent is collapsed. Toggling
/// an id back to collapsed removes it, so two states showing the same thing
/// always compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    expanded: HashSet<ProductId>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the expansion flag of `id` and returns the new value.
    pub fn toggle_description(&mut self, id: ProductId) -> bool {
        if self.expanded.remove(&id) {
            false
        } else {
            self.expanded.insert(id);
            true
        }
    }

    /// Defaults to `false` for ids never toggled
    pub fn is_expanded(&self, id: ProductId) -> bool {
        self.expanded.contains(&id)
    }
}
