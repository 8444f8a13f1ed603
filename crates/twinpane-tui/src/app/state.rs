//! Application state types.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use strum::Display;

use twinpane_ops::FolderStats;

use crate::theme::ThemeVariant;

/// Which pane receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum Side {
    #[default]
    #[strum(serialize = "left")]
    Left,
    #[strum(serialize = "right")]
    Right,
}

impl Side {
    /// The other pane.
    pub fn other(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// An operation waiting for confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingOperation {
    /// Copy `source` into `dest_dir`, shown in the `target` pane.
    Copy {
        source: PathBuf,
        dest_dir: PathBuf,
        target: Side,
    },
    /// Delete `path` from the `target` pane.
    Delete { path: PathBuf, target: Side },
}

impl PendingOperation {
    /// Dialog title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Copy { .. } => "Copy",
            Self::Delete { .. } => "Delete",
        }
    }

    /// Dialog body.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Copy {
                source, dest_dir, ..
            } => vec![
                format!("Copy {}", file_name(source)),
                "to".to_string(),
                dest_dir.display().to_string(),
            ],
            Self::Delete { path, .. } => vec![
                format!("Delete {}?", file_name(path)),
                path.display().to_string(),
            ],
        }
    }
}

fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Buttons of a confirm dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmButton {
    Ok,
    #[default]
    Cancel,
}

impl ConfirmButton {
    /// Labels in display order.
    pub const LABELS: [&'static str; 2] = ["OK", "Cancel"];

    /// Focus the other button.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ok => Self::Cancel,
            Self::Cancel => Self::Ok,
        }
    }

    /// Position in [`Self::LABELS`].
    pub fn index(self) -> usize {
        match self {
            Self::Ok => 0,
            Self::Cancel => 1,
        }
    }
}

/// Current interaction mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Browsing the panes.
    #[default]
    Normal,
    /// Confirm dialog for a copy or delete.
    Confirm {
        operation: PendingOperation,
        active: ConfirmButton,
    },
    /// Folder properties popup.
    Stats { name: String, stats: FolderStats },
    /// Help overlay.
    Help,
    /// Exiting.
    Quit,
}

/// Severity of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Warning,
    Error,
}

/// Message shown in the footer until the next one replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Info,
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Warning,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Error,
        }
    }
}

/// Settings persisted between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    /// Folder shown in the left pane when the browser was last closed.
    pub left_path: PathBuf,
    /// Folder shown in the right pane when the browser was last closed.
    pub right_path: PathBuf,
    /// Show dot-files.
    pub show_hidden: bool,
    /// Color theme.
    pub theme: ThemeVariant,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            left_path: PathBuf::new(),
            right_path: PathBuf::new(),
            show_hidden: true,
            theme: ThemeVariant::Dark,
        }
    }
}

impl UserSettings {
    /// Get the config file path.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("twinpane").join("settings.toml"))
    }

    /// Load settings from disk, or return defaults.
    pub fn load() -> Self {
        Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    /// Load settings from `path`, or return defaults.
    pub fn load_from(path: &std::path::Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Save settings to disk.
    pub fn save(&self) -> std::io::Result<()> {
        let path = Self::config_path().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "No config directory")
        })?;
        self.save_to(&path)
    }

    /// Save settings to `path`, creating its folder if needed.
    pub fn save_to(&self, path: &std::path::Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        std::fs::write(path, content)
    }
}
