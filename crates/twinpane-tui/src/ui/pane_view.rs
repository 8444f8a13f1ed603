//! Pane widget: a bordered, column-aligned listing.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Widget};

use twinpane_core::{Entry, EntryKind, FileInfo, Volume};
use twinpane_ops::FileSystem;

use crate::pane::PaneState;
use crate::theme::Theme;
use crate::ui::text::{fit, fit_right, shrink_middle};
use crate::ui::{format_size, format_time};

const SIZE_WIDTH: usize = 10;
const DATE_WIDTH: usize = 16;
const ATTR_WIDTH: usize = 3;

/// Below this inner width only names and sizes are shown.
const WIDE_PANE: usize = 48;

/// Renders one [`PaneState`].
pub struct PaneView<'a> {
    pane: &'a PaneState,
    fs: &'a dyn FileSystem,
    volumes: &'a [Volume],
    theme: &'a Theme,
    active: bool,
}

impl<'a> PaneView<'a> {
    /// Create a new pane view.
    pub fn new(
        pane: &'a PaneState,
        fs: &'a dyn FileSystem,
        volumes: &'a [Volume],
        theme: &'a Theme,
    ) -> Self {
        Self {
            pane,
            fs,
            volumes,
            theme,
            active: false,
        }
    }

    /// Mark this as the pane receiving keys.
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    fn title(&self, width: usize) -> String {
        let root = self.pane.root();
        let text = if root.as_os_str().is_empty() {
            "Volumes".to_string()
        } else {
            root.display().to_string()
        };
        format!(" {} ", shrink_middle(&text, width.saturating_sub(4)))
    }

    /// Text for the size column.
    fn size_label(&self, index: usize, entry: &Entry, info: Option<&FileInfo>) -> String {
        if self.pane.entries().is_parent_index(index) {
            return "<BACK>".to_string();
        }
        match entry.kind {
            EntryKind::Folder => "<DIR>".to_string(),
            EntryKind::Volume => self
                .volumes
                .iter()
                .find(|v| v.root == entry.path)
                .and_then(|v| v.total_size)
                .map(format_size)
                .unwrap_or_else(|| "<VOL>".to_string()),
            EntryKind::File => info.map(|i| format_size(i.length)).unwrap_or_default(),
        }
    }

    fn entry_style(&self, index: usize, entry: &Entry) -> Style {
        if self.pane.entries().is_parent_index(index) {
            return self.theme.parent;
        }
        match entry.kind {
            EntryKind::Volume => self.theme.volume,
            EntryKind::Folder => self.theme.directory,
            EntryKind::File => self.theme.file,
        }
    }

    fn render_row(&self, index: usize, entry: &Entry, area: Rect, buf: &mut Buffer) {
        let width = area.width as usize;
        let wide = width >= WIDE_PANE;

        // Metadata is looked up only for rows on screen.
        let info = if entry.kind == EntryKind::Volume || self.pane.entries().is_parent_index(index) {
            None
        } else {
            self.fs.file_info(&entry.path).ok()
        };

        let fixed = if wide {
            SIZE_WIDTH + DATE_WIDTH + ATTR_WIDTH + 3
        } else {
            SIZE_WIDTH + 1
        };
        let name_width = width.saturating_sub(fixed);

        let name_style = self.entry_style(index, entry);
        let mut spans = vec![
            Span::styled(fit(&entry.name, name_width), name_style),
            Span::raw(" "),
            Span::styled(
                fit_right(&self.size_label(index, entry, info.as_ref()), SIZE_WIDTH),
                Style::default().fg(self.theme.muted),
            ),
        ];

        if wide {
            let date = info
                .and_then(|i| i.display_time())
                .map(format_time)
                .unwrap_or_default();
            let attrs = info.map(|i| i.attributes.flags()).unwrap_or_default();
            spans.push(Span::raw(" "));
            spans.push(Span::styled(fit(&date, DATE_WIDTH), Style::default().fg(self.theme.muted)));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(fit(&attrs, ATTR_WIDTH), Style::default().fg(self.theme.muted)));
        }

        let mut line = Line::from(spans);
        if self.pane.viewport().is_selected(index) {
            line = line.style(if self.active {
                self.theme.selected
            } else {
                self.theme.selected_inactive
            });
        }
        line.render(area, buf);
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let width = area.width as usize;
        let text = if width >= WIDE_PANE {
            let name_width = width.saturating_sub(SIZE_WIDTH + DATE_WIDTH + ATTR_WIDTH + 3);
            format!(
                "{} {} {} {}",
                fit("Name", name_width),
                fit_right("Size", SIZE_WIDTH),
                fit("Created", DATE_WIDTH),
                fit("Att", ATTR_WIDTH)
            )
        } else {
            let name_width = width.saturating_sub(SIZE_WIDTH + 1);
            format!("{} {}", fit("Name", name_width), fit_right("Size", SIZE_WIDTH))
        };
        Line::styled(text, self.theme.column_header).render(area, buf);
    }
}

impl Widget for PaneView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.title(area.width as usize))
            .title_style(self.theme.title)
            .borders(Borders::ALL)
            .border_style(if self.active {
                self.theme.border_active
            } else {
                self.theme.border
            });

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        self.render_header(Rect::new(inner.x, inner.y, inner.width, 1), buf);

        let viewport = self.pane.viewport();
        let entries = self.pane.entries();
        for (row, index) in viewport.visible_range().enumerate() {
            let y = inner.y + 1 + row as u16;
            if y >= inner.bottom() {
                break;
            }
            if let Some(entry) = entries.get(index) {
                self.render_row(index, entry, Rect::new(inner.x, y, inner.width, 1), buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;
    use twinpane_ops::{LocalFs, MemorySink, OperationExecutor};

    use super::*;

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_renders_reserved_row_and_folders() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("readme.md"), vec![0u8; 2048]).unwrap();

        let local = LocalFs::default();
        let sink = MemorySink::new();
        let exec = OperationExecutor::new(&local, &sink);
        let pane = PaneState::open(&exec, dir.path(), 5);
        let theme = Theme::dark();

        let area = Rect::new(0, 0, 60, 8);
        let mut buf = Buffer::empty(area);
        PaneView::new(&pane, &local, &[], &theme).active(true).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("<BACK>"));
        assert!(text.contains("docs"));
        assert!(text.contains("<DIR>"));
        assert!(text.contains("readme.md"));
        assert!(text.contains("2 KiB"));
        assert!(text.contains("Created"));
    }

    #[test]
    fn test_narrow_pane_drops_date_column() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();

        let local = LocalFs::default();
        let sink = MemorySink::new();
        let exec = OperationExecutor::new(&local, &sink);
        let pane = PaneState::open(&exec, dir.path(), 3);
        let theme = Theme::dark();

        let area = Rect::new(0, 0, 30, 6);
        let mut buf = Buffer::empty(area);
        PaneView::new(&pane, &local, &[], &theme).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("a.txt"));
        assert!(!text.contains("Created"));
    }
}
