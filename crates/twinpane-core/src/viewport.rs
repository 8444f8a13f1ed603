//! Scrolling window over a pane listing.
//!
//! A [`Viewport`] tracks which contiguous slice of a listing is on screen
//! (`first_visible..last_visible`, end exclusive) together with the selected
//! row. Callers move the selection by one row at a time, or jump to either
//! end after calling [`Viewport::reset`]; [`Viewport::recompute`] then brings
//! the window back in line with the selection.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Visible window and cursor of one pane.
///
/// The all-zero value doubles as the "no window yet" sentinel, as does any
/// value with `first_visible > last_visible`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    /// Index of the first row on screen.
    pub first_visible: usize,
    /// One past the index of the last row on screen.
    pub last_visible: usize,
    /// Index of the selected row.
    pub selected: usize,
}

impl Viewport {
    /// Create a viewport with no window yet and the given selection.
    pub fn with_selected(selected: usize) -> Self {
        Self {
            first_visible: 0,
            last_visible: 0,
            selected,
        }
    }

    /// Whether the window must be rebuilt from scratch on the next recompute.
    pub fn is_reset(&self) -> bool {
        (self.first_visible == 0 && self.last_visible == 0)
            || self.first_visible > self.last_visible
    }

    /// Drop the window, keeping the selection.
    pub fn reset(&mut self) {
        self.first_visible = 0;
        self.last_visible = 0;
    }

    /// Rows currently on screen.
    pub fn visible_range(&self) -> Range<usize> {
        self.first_visible..self.last_visible.max(self.first_visible)
    }

    /// Number of rows currently on screen.
    pub fn visible_len(&self) -> usize {
        self.last_visible.saturating_sub(self.first_visible)
    }

    /// Whether `index` is the selected row.
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == index
    }

    /// Recompute the window for a listing of `len` rows shown in `capacity`
    /// rows of screen space.
    ///
    /// The window scrolls at most one row per call. A window that no longer
    /// fits the listing (it shrank, or the pane was resized) is rebuilt as if
    /// it had been reset.
    pub fn recompute(self, len: usize, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        if len == 0 {
            return Self::default();
        }

        let mut selected = self.selected.min(len - 1);
        let mut first = self.first_visible;
        let mut last = self.last_visible;

        if self.is_reset() || !Self::fits(first, last, len, capacity) {
            if selected < capacity {
                first = 0;
                last = len.min(capacity);
            } else {
                // Selection sits on the bottom row.
                first = selected + 1 - capacity;
                last = selected + 1;
            }
        } else if selected < first {
            first -= 1;
            last -= 1;
        } else if selected >= last {
            first += 1;
            last += 1;
        }

        if selected >= last {
            selected = last.saturating_sub(1);
        } else if selected < first {
            selected = first;
        }

        Self {
            first_visible: first,
            last_visible: last,
            selected,
        }
    }

    /// A computed window is reusable only while it spans exactly
    /// `min(len, capacity)` rows inside the listing.
    fn fits(first: usize, last: usize, len: usize, capacity: usize) -> bool {
        last <= len && last - first == len.min(capacity)
    }
}
