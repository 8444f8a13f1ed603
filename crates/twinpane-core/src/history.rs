//! Per-pane record of the rows selected on the way down a folder hierarchy.

use serde::{Deserialize, Serialize};

/// LIFO stack of selection indices, one level per entered folder.
///
/// Entering a child remembers the row the user came from; returning to the
/// parent restores it, so the cursor lands back on the folder just left.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionHistory {
    stack: Vec<usize>,
}

impl SelectionHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `current` before descending and return the selection for the
    /// child listing (always the top row).
    ///
    /// Index 0 is the reserved parent entry and is never recorded.
    pub fn enter_child(&mut self, current: usize) -> usize {
        if current != 0 {
            self.stack.push(current);
        }
        0
    }

    /// Pop the selection to restore in the parent listing, or 0 when nothing
    /// was recorded.
    pub fn return_to_parent(&mut self) -> usize {
        self.stack.pop().unwrap_or(0)
    }

    /// Forget every recorded level.
    pub fn clear(&mut self) {
        self.stack.clear();
    }

    /// Number of recorded levels.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Check if nothing is recorded.
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
