//! Modal dialog widgets.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};

use twinpane_ops::{Conflict, ConflictKind, FolderStats, Notice};

use crate::theme::Theme;
use crate::ui::format_size;
use crate::ui::text::shrink_middle;

/// Centered popup area of at most `width` x `height`.
fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(area.width.saturating_sub(4));
    let popup_height = height.min(area.height.saturating_sub(2));

    let popup_x = (area.width.saturating_sub(popup_width)) / 2 + area.x;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2 + area.y;

    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

/// Clear `popup`, draw the frame, and return the inner area.
fn render_frame(popup: Rect, buf: &mut Buffer, title: &str, color: Color) -> Rect {
    Clear.render(popup, buf);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let inner = block.inner(popup);
    block.render(popup, buf);
    inner
}

/// Body lines shortened from the middle to fit `width`.
fn body_lines(lines: &[String], width: u16, style: Style) -> Vec<Line<'static>> {
    let max_len = (width as usize).saturating_sub(2);
    lines
        .iter()
        .map(|l| Line::styled(shrink_middle(l, max_len), style))
        .collect()
}

fn button_row<'b>(theme: &Theme, buttons: &[&'b str], active: usize) -> Line<'b> {
    let mut spans = Vec::with_capacity(buttons.len() * 2);
    for (idx, label) in buttons.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("   "));
        }
        let style = if idx == active {
            theme.button_active
        } else {
            theme.button
        };
        spans.push(Span::styled(format!(" {label} "), style));
    }
    Line::from(spans).alignment(Alignment::Center)
}

/// A question with two or more buttons, one of them focused.
pub struct QuestionModal<'a> {
    theme: &'a Theme,
    title: &'a str,
    lines: Vec<String>,
    buttons: &'a [&'a str],
    active: usize,
    color: Color,
}

impl<'a> QuestionModal<'a> {
    /// Create a new question modal.
    pub fn new(
        theme: &'a Theme,
        title: &'a str,
        lines: Vec<String>,
        buttons: &'a [&'a str],
        active: usize,
    ) -> Self {
        Self {
            theme,
            title,
            lines,
            buttons,
            active,
            color: theme.warning,
        }
    }

    /// Frame color.
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Widget for QuestionModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = popup_area(area, 60, self.lines.len() as u16 + 6);
        let inner = render_frame(popup, buf, self.title, self.color);

        let mut lines = body_lines(&self.lines, inner.width, Style::default().fg(self.theme.foreground));
        lines.push(Line::raw(""));
        lines.push(button_row(self.theme, self.buttons, self.active));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

/// Asks what to do about an existing destination.
pub struct ConflictModal<'a> {
    theme: &'a Theme,
    conflict: &'a Conflict,
    active: usize,
}

impl<'a> ConflictModal<'a> {
    /// Buttons in display order.
    pub const BUTTONS: [&'static str; 2] = ["Skip", "Replace"];

    /// Create a new conflict modal.
    pub fn new(theme: &'a Theme, conflict: &'a Conflict, active: usize) -> Self {
        Self {
            theme,
            conflict,
            active,
        }
    }
}

impl Widget for ConflictModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = match self.conflict.kind {
            ConflictKind::FileExists => "File Exists",
            ConflictKind::DirectoryExists => "Directory Exists",
        };
        let lines = self.conflict.prompt_lines();
        let popup = popup_area(area, 60, lines.len() as u16 + 7);
        let inner = render_frame(popup, buf, title, self.theme.warning);

        let mut body = body_lines(&lines, inner.width, Style::default().fg(self.theme.foreground));
        body.push(Line::raw(""));
        body.push(button_row(self.theme, &Self::BUTTONS, self.active));
        body.push(Line::from(vec![
            Span::styled(" s ", self.theme.help_key),
            Span::styled("skip  ", self.theme.help_desc),
            Span::styled(" r ", self.theme.help_key),
            Span::styled("replace  ", self.theme.help_desc),
            Span::styled(" other ", self.theme.help_key),
            Span::styled("cancel", self.theme.help_desc),
        ]));

        Paragraph::new(body)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

/// Folder properties.
pub struct StatsModal<'a> {
    theme: &'a Theme,
    name: &'a str,
    stats: FolderStats,
}

impl<'a> StatsModal<'a> {
    /// Create a new stats modal.
    pub fn new(theme: &'a Theme, name: &'a str, stats: FolderStats) -> Self {
        Self { theme, name, stats }
    }
}

impl Widget for StatsModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = popup_area(area, 50, 8);
        let title = format!("Properties - {}", shrink_middle(self.name, 30));
        let inner = render_frame(popup, buf, &title, self.theme.info);

        let row = |label: &'static str, value: String| {
            Line::from(vec![
                Span::styled(format!("{label:<12}"), self.theme.help_desc),
                Span::styled(value, Style::default().fg(self.theme.foreground)),
            ])
        };
        let lines = vec![
            row("Folders:", self.stats.dirs.to_string()),
            row("Files:", self.stats.files.to_string()),
            row("Total size:", format_size(self.stats.bytes)),
            Line::raw(""),
            button_row(self.theme, &["Close"], 0),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}

/// A progress or failure notice.
pub struct NoticeModal<'a> {
    theme: &'a Theme,
    notice: &'a Notice,
}

impl<'a> NoticeModal<'a> {
    /// Create a new notice modal.
    pub fn new(theme: &'a Theme, notice: &'a Notice) -> Self {
        Self { theme, notice }
    }
}

impl Widget for NoticeModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.notice.lines();
        let color = match self.notice {
            Notice::Failed(_) => self.theme.error,
            _ => self.theme.info,
        };
        let popup = popup_area(area, 60, lines.len() as u16 + 2);
        let inner = render_frame(popup, buf, self.notice.title(), color);

        Paragraph::new(body_lines(&lines, inner.width, Style::default().fg(self.theme.foreground)))
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
