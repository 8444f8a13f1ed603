//! Blocking dialogs drawn while an operation runs.
//!
//! Copy and delete run to completion on the UI thread. While they do, the
//! engines call back into [`TerminalDialogs`] to show progress notices and to
//! ask about conflicts; both are drawn on top of the last frame the
//! application rendered, and conflict answers are read synchronously from the
//! terminal.

use std::cell::RefCell;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use twinpane_ops::{Conflict, ConflictOutcome, ConflictResolver, Notice, Notifier};

use crate::event::DialogKey;
use crate::theme::Theme;
use crate::ui::modals::{ConflictModal, NoticeModal};

/// Focus and answer logic of the conflict dialog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConflictPrompt {
    /// Focused button: 0 = Skip, 1 = Replace.
    pub active: usize,
}

impl ConflictPrompt {
    /// Apply one key. Returns the answer once the dialog closes.
    pub fn press(&mut self, key: DialogKey) -> Option<ConflictOutcome> {
        match key {
            DialogKey::Toggle => {
                self.active = 1 - self.active;
                None
            }
            DialogKey::Confirm if self.active == 1 => Some(ConflictOutcome::Replace),
            DialogKey::Confirm => Some(ConflictOutcome::Skip),
            DialogKey::Pick('s') => Some(ConflictOutcome::Skip),
            DialogKey::Pick('r') => Some(ConflictOutcome::Replace),
            DialogKey::Pick(_) | DialogKey::Dismiss => Some(ConflictOutcome::Cancel),
        }
    }
}

/// Notifier and conflict resolver bound to the terminal.
pub struct TerminalDialogs<'t> {
    terminal: RefCell<&'t mut DefaultTerminal>,
    backdrop: Buffer,
    theme: Theme,
}

impl<'t> TerminalDialogs<'t> {
    /// Create dialogs drawn over `backdrop`, the last rendered frame.
    pub fn new(terminal: &'t mut DefaultTerminal, backdrop: Buffer, theme: Theme) -> Self {
        Self {
            terminal: RefCell::new(terminal),
            backdrop,
            theme,
        }
    }

    fn show(&self, widget: impl Widget) {
        let mut terminal = self.terminal.borrow_mut();
        let result = terminal.draw(|frame| {
            let area: Rect = frame.area();
            if self.backdrop.area == area {
                *frame.buffer_mut() = self.backdrop.clone();
            }
            frame.render_widget(widget, area);
        });
        if let Err(e) = result {
            tracing::warn!("failed to draw dialog: {}", e);
        }
    }
}

impl Notifier for TerminalDialogs<'_> {
    fn notify(&self, notice: &Notice) {
        self.show(NoticeModal::new(&self.theme, notice));
    }
}

impl ConflictResolver for TerminalDialogs<'_> {
    fn resolve(&self, conflict: &Conflict) -> ConflictOutcome {
        let mut prompt = ConflictPrompt::default();
        loop {
            self.show(ConflictModal::new(&self.theme, conflict, prompt.active));

            let key = match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => key,
                Ok(_) => continue,
                Err(e) => {
                    tracing::warn!("failed to read conflict answer: {}", e);
                    return ConflictOutcome::Cancel;
                }
            };

            if let Some(outcome) = prompt.press(DialogKey::from_key_event(key)) {
                tracing::debug!("{}: {:?}", conflict.destination.display(), outcome);
                return outcome;
            }
        }
    }
}
