//! UI components and widgets.

mod help;
pub mod modals;
mod pane_view;
pub mod text;

pub use help::HelpOverlay;
pub use pane_view::PaneView;

use std::time::SystemTime;

use chrono::{DateTime, Local};
use ratatui::layout::{Constraint, Layout, Rect};

/// Layout areas for the application.
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    pub header: Rect,
    pub left: Rect,
    pub right: Rect,
    /// Full path of the selected entry.
    pub path_line: Rect,
    pub footer: Rect,
}

impl AppLayout {
    /// Compute layout from terminal area.
    pub fn new(area: Rect) -> Self {
        // Vertical split: header, panes, selected path, footer
        let [header, content, path_line, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let [left, right] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(content);

        Self {
            header,
            left,
            right,
            path_line,
            footer,
        }
    }

    /// Listing rows that fit in a pane area: borders and the column header
    /// row are taken off.
    pub fn pane_capacity(pane: Rect) -> usize {
        pane.height.saturating_sub(3).max(1) as usize
    }
}

/// Format a byte size in human-readable form.
pub fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}

/// Format a timestamp as local date and time.
pub fn format_time(time: SystemTime) -> String {
    DateTime::<Local>::from(time).format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_splits_panes_evenly() {
        let layout = AppLayout::new(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.left.width, 40);
        assert_eq!(layout.right.width, 40);
        assert_eq!(layout.left.height, 21);
        assert_eq!(AppLayout::pane_capacity(layout.left), 18);
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(2048), "2 KiB");
    }
}
