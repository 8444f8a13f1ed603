//! Key handling.

use crossterm::event::KeyEvent;

use twinpane_core::EntryKind;

use crate::event::{DialogKey, KeyAction};
use crate::pane::{Activation, RefreshMode};

use super::App;
use super::state::{AppMode, ConfirmButton, PendingOperation, StatusMessage};

impl App {
    /// Handle one key press. Returns an operation once its confirm dialog was
    /// accepted; the caller runs it.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<PendingOperation> {
        match self.mode {
            AppMode::Normal => {
                self.handle_normal(KeyAction::from_key_event(key));
                None
            }
            AppMode::Confirm { .. } => self.handle_confirm(DialogKey::from_key_event(key)),
            AppMode::Stats { .. } | AppMode::Help => {
                self.mode = AppMode::Normal;
                None
            }
            AppMode::Quit => None,
        }
    }

    fn handle_confirm(&mut self, key: DialogKey) -> Option<PendingOperation> {
        let AppMode::Confirm { operation, active } = &mut self.mode else {
            return None;
        };

        match key {
            DialogKey::Toggle => {
                *active = active.toggle();
                None
            }
            DialogKey::Confirm if *active == ConfirmButton::Ok => {
                let operation = operation.clone();
                self.mode = AppMode::Normal;
                Some(operation)
            }
            _ => {
                self.mode = AppMode::Normal;
                None
            }
        }
    }

    fn handle_normal(&mut self, action: KeyAction) {
        let exec = self.services.executor();
        let pane = self.panes.get_mut(self.active);

        match action {
            KeyAction::MoveUp => pane.move_up(),
            KeyAction::MoveDown => pane.move_down(),
            KeyAction::PageUp => pane.page_up(),
            KeyAction::PageDown => pane.page_down(),
            KeyAction::JumpToTop => pane.jump_to_top(),
            KeyAction::JumpToBottom => pane.jump_to_bottom(),

            KeyAction::Activate => {
                let activation = pane.activate(&exec);
                self.report_activation(activation);
            }
            KeyAction::NavigateBack => {
                let activation = pane.go_up(&exec);
                self.report_activation(activation);
            }
            KeyAction::ShowVolumes => {
                if let Err(e) = pane.show_volumes(&exec) {
                    self.status = Some(StatusMessage::error(e.to_string()));
                }
                self.sync_volumes();
            }

            KeyAction::SwitchPane => self.active = self.active.other(),

            KeyAction::Copy => self.prepare_copy(),
            KeyAction::Delete => self.prepare_delete(),
            KeyAction::Properties => self.show_properties(),
            KeyAction::Refresh => {
                for side in [self.active, self.active.other()] {
                    if let Err(e) = self.panes.get_mut(side).refresh(&exec, RefreshMode::Keep) {
                        self.status = Some(StatusMessage::error(e.to_string()));
                    }
                }
                self.sync_volumes();
            }

            KeyAction::ToggleHelp => self.mode = AppMode::Help,
            KeyAction::ToggleTheme => self.theme = self.theme.toggle(),
            KeyAction::Quit | KeyAction::ForceQuit => self.mode = AppMode::Quit,
            KeyAction::None => {}
        }
    }

    fn report_activation(&mut self, activation: Activation) {
        match activation {
            Activation::Opened => {
                if self.panes.get(self.active).entries().is_volume_view() {
                    self.sync_volumes();
                }
            }
            Activation::Launched(path) => {
                self.status = Some(StatusMessage::info(format!("Opened {}", path.display())));
            }
            Activation::Failed(error) => {
                self.status = Some(StatusMessage::error(error.to_string()));
            }
            Activation::Nothing => {}
        }
    }

    fn prepare_copy(&mut self) {
        let source_pane = self.panes.get(self.active);
        let target = self.active.other();
        let dest_dir = self.panes.get(target).root().to_path_buf();

        let Some(entry) = source_pane.selected_item() else {
            return;
        };
        if entry.kind == EntryKind::Volume {
            self.status = Some(StatusMessage::warning("Volumes cannot be copied"));
            return;
        }
        if dest_dir.as_os_str().is_empty() {
            self.status = Some(StatusMessage::warning("Open a folder in the other pane first"));
            return;
        }

        self.mode = AppMode::Confirm {
            operation: PendingOperation::Copy {
                source: entry.path.clone(),
                dest_dir,
                target,
            },
            active: ConfirmButton::default(),
        };
    }

    fn prepare_delete(&mut self) {
        let Some(entry) = self.panes.get(self.active).selected_item() else {
            return;
        };
        if entry.kind == EntryKind::Volume {
            self.status = Some(StatusMessage::warning("Volumes cannot be deleted"));
            return;
        }

        self.mode = AppMode::Confirm {
            operation: PendingOperation::Delete {
                path: entry.path.clone(),
                target: self.active,
            },
            active: ConfirmButton::default(),
        };
    }

    fn show_properties(&mut self) {
        let Some(entry) = self.panes.get(self.active).selected_item() else {
            return;
        };
        // Only folders have properties worth a popup.
        if !entry.kind.is_container() {
            return;
        }

        let name = entry.name.to_string();
        let stats = self.services.executor().stats(&entry.path);
        self.mode = AppMode::Stats { name, stats };
    }
}
