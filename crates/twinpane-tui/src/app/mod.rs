//! Application state and main loop.

mod input;
mod render;
pub mod state;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use ratatui::layout::{Rect, Size};

use twinpane_core::{BrowserConfig, Volume};
use twinpane_ops::{
    ConflictResolver, ErrorLog, FileSystem, LocalFs, Notifier, OperationComplete, OperationError,
    OperationExecutor,
};

use crate::dialogs::TerminalDialogs;
use crate::pane::{PaneState, RefreshMode};
use crate::theme::Theme;
use crate::ui::AppLayout;

use self::state::{AppMode, PendingOperation, Side, StatusMessage, UserSettings};

/// Result type for the TUI application.
pub type AppResult<T> = color_eyre::Result<T>;

/// Filesystem and error log shared by every operation.
#[derive(Debug)]
struct Services {
    fs: LocalFs,
    errors: ErrorLog,
}

impl Services {
    fn executor(&self) -> OperationExecutor<'_> {
        OperationExecutor::new(&self.fs, &self.errors)
    }
}

/// The two panes.
#[derive(Debug)]
struct Panes {
    left: PaneState,
    right: PaneState,
}

impl Panes {
    fn get(&self, side: Side) -> &PaneState {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn get_mut(&mut self, side: Side) -> &mut PaneState {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// Main application state.
pub struct App {
    services: Services,
    panes: Panes,
    /// Pane receiving keys.
    active: Side,
    mode: AppMode,
    status: Option<StatusMessage>,
    theme: Theme,
    /// Volumes with their sizes, for the volume view.
    volumes: Vec<Volume>,
    settings: UserSettings,
}

impl App {
    /// Create the application with both panes opened.
    pub fn new(config: BrowserConfig, settings: UserSettings) -> Self {
        let services = Services {
            fs: LocalFs::new(config.include_hidden),
            errors: ErrorLog::new(config.error_log.clone()),
        };

        let exec = services.executor();
        let panes = Panes {
            left: PaneState::open(&exec, &config.left_root, 1),
            right: PaneState::open(&exec, &config.right_root, 1),
        };
        let volumes = services.fs.volumes().unwrap_or_default();

        tracing::debug!(
            "opened {} and {}",
            panes.left.root().display(),
            panes.right.root().display()
        );

        Self {
            services,
            panes,
            active: Side::Left,
            mode: AppMode::Normal,
            status: None,
            theme: Theme::from_variant(settings.theme),
            volumes,
            settings: UserSettings {
                show_hidden: config.include_hidden,
                ..settings
            },
        }
    }

    /// Run the main loop until the user quits.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> AppResult<()> {
        while self.mode != AppMode::Quit {
            self.fit_to(terminal.size()?);
            terminal.draw(|frame| self.render(frame))?;

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(operation) = self.handle_key(key) {
                        self.execute(&mut terminal, operation)?;
                    }
                }
                // Resizes are picked up by the next draw.
                _ => {}
            }
        }

        self.save_settings();
        Ok(())
    }

    /// Current interaction mode.
    pub fn mode(&self) -> &AppMode {
        &self.mode
    }

    /// Pane receiving keys.
    pub fn active_side(&self) -> Side {
        self.active
    }

    /// One of the panes.
    pub fn pane(&self, side: Side) -> &PaneState {
        self.panes.get(side)
    }

    /// Footer message, if any.
    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Settings as they would be saved now.
    pub fn settings(&self) -> UserSettings {
        UserSettings {
            left_path: self.panes.left.root().to_path_buf(),
            right_path: self.panes.right.root().to_path_buf(),
            show_hidden: self.settings.show_hidden,
            theme: self.theme.variant,
        }
    }

    /// Give both panes the row count of the current terminal size.
    fn fit_to(&mut self, size: Size) {
        let layout = AppLayout::new(Rect::new(0, 0, size.width, size.height));
        self.panes.left.set_capacity(AppLayout::pane_capacity(layout.left));
        self.panes.right.set_capacity(AppLayout::pane_capacity(layout.right));
    }

    /// Run a confirmed operation with dialogs drawn over the current screen.
    fn execute(&mut self, terminal: &mut DefaultTerminal, operation: PendingOperation) -> AppResult<()> {
        let completed = terminal.draw(|frame| self.render(frame))?;
        let backdrop = completed.buffer.clone();

        let dialogs = TerminalDialogs::new(terminal, backdrop, self.theme.clone());
        self.apply(&operation, &dialogs, &dialogs);
        Ok(())
    }

    /// Run `operation`, then re-list the panes and report the outcome.
    pub fn apply(
        &mut self,
        operation: &PendingOperation,
        notifier: &dyn Notifier,
        resolver: &dyn ConflictResolver,
    ) -> OperationComplete {
        let exec = self.services.executor().with_notifier(notifier);

        let (result, target, mode) = match operation {
            PendingOperation::Copy {
                source,
                dest_dir,
                target,
            } => (
                exec.copy(source, dest_dir, false, resolver),
                *target,
                RefreshMode::Reset,
            ),
            PendingOperation::Delete { path, target } => {
                (exec.delete(path, false), *target, RefreshMode::StepBack)
            }
        };
        tracing::debug!("{} into {} pane: {}", operation.title(), target, result.summary());

        // Both panes are re-listed even when one fails; the first error wins.
        let exec = self.services.executor();
        let mut refresh_error = None;
        for (side, mode) in [(target, mode), (target.other(), RefreshMode::Keep)] {
            if let Err(e) = self.panes.get_mut(side).refresh(&exec, mode) {
                refresh_error.get_or_insert(e);
            }
        }

        self.status = Some(self.outcome_status(&result, refresh_error.as_ref()));
        result
    }

    /// Status line for a finished operation.
    fn outcome_status(&self, result: &OperationComplete, refresh_error: Option<&OperationError>) -> StatusMessage {
        if let Some(e) = refresh_error {
            StatusMessage::error(format!("{} (refresh failed: {})", result.summary(), e))
        } else if result.is_success() {
            StatusMessage::info(result.summary())
        } else {
            StatusMessage::warning(format!(
                "{} (see {})",
                result.summary(),
                self.services.errors.path().display()
            ))
        }
    }

    /// Re-read the volume list.
    fn sync_volumes(&mut self) {
        match self.services.fs.volumes() {
            Ok(volumes) => self.volumes = volumes,
            Err(e) => tracing::warn!("failed to list volumes: {}", e),
        }
    }

    fn save_settings(&self) {
        if let Err(e) = self.settings().save() {
            tracing::warn!("failed to save settings: {}", e);
        }
    }
}
