//! Frame rendering.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::ui::modals::{QuestionModal, StatsModal};
use crate::ui::text::shrink_middle;
use crate::ui::{AppLayout, HelpOverlay, PaneView};

use super::App;
use super::state::{AppMode, ConfirmButton, Side, StatusKind};

impl App {
    /// Draw the whole screen.
    pub(crate) fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let layout = AppLayout::new(area);

        self.render_header(frame, layout.header);

        for (side, rect) in [(Side::Left, layout.left), (Side::Right, layout.right)] {
            let view = PaneView::new(self.panes.get(side), &self.services.fs, &self.volumes, &self.theme)
                .active(side == self.active);
            frame.render_widget(view, rect);
        }

        self.render_path_line(frame, layout.path_line);
        self.render_footer(frame, layout.footer);

        match &self.mode {
            AppMode::Confirm { operation, active } => {
                let modal = QuestionModal::new(
                    &self.theme,
                    operation.title(),
                    operation.lines(),
                    &ConfirmButton::LABELS,
                    active.index(),
                );
                frame.render_widget(modal, area);
            }
            AppMode::Stats { name, stats } => {
                frame.render_widget(StatsModal::new(&self.theme, name, *stats), area);
            }
            AppMode::Help => frame.render_widget(HelpOverlay::new(&self.theme), area),
            AppMode::Normal | AppMode::Quit => {}
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(" twinpane ", self.theme.title),
            Span::styled(" F1 ", self.theme.help_key),
            Span::raw("Help "),
            Span::styled(" F2 ", self.theme.help_key),
            Span::raw("Volumes "),
            Span::styled(" F5 ", self.theme.help_key),
            Span::raw("Copy "),
            Span::styled(" F8 ", self.theme.help_key),
            Span::raw("Delete "),
            Span::styled(" F10 ", self.theme.help_key),
            Span::raw("Quit"),
        ]);
        Paragraph::new(line)
            .style(self.theme.header)
            .render(area, frame.buffer_mut());
    }

    /// Full path of the selected entry in the active pane.
    fn render_path_line(&self, frame: &mut Frame, area: Rect) {
        let pane = self.panes.get(self.active);
        let text = pane
            .selected_entry()
            .map(|e| {
                if e.path.as_os_str().is_empty() {
                    "Volumes".to_string()
                } else {
                    e.path.display().to_string()
                }
            })
            .unwrap_or_default();
        let text = shrink_middle(&text, area.width.saturating_sub(1) as usize);
        Paragraph::new(format!(" {text}"))
            .style(Style::default().fg(self.theme.foreground))
            .render(area, frame.buffer_mut());
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let line = match &self.status {
            Some(status) => {
                let color = match status.kind {
                    StatusKind::Info => self.theme.success,
                    StatusKind::Warning => self.theme.warning,
                    StatusKind::Error => self.theme.error,
                };
                Line::styled(format!(" {}", status.text), Style::default().fg(color))
            }
            None => {
                let pane = self.panes.get(self.active);
                Line::from(format!(
                    " {} items  {}/{}",
                    pane.entries().len(),
                    pane.viewport().selected + 1,
                    pane.entries().len().max(1)
                ))
            }
        };
        Paragraph::new(line)
            .style(self.theme.footer)
            .render(area, frame.buffer_mut());
    }
}
