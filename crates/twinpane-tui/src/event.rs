//! Event handling for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Key action that can be performed in the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    // Navigation
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    JumpToTop,
    JumpToBottom,

    // Directory navigation
    Activate,
    NavigateBack,
    ShowVolumes,

    // Panes
    SwitchPane,

    // File operations
    /// Copy the selected item into the other pane's folder.
    Copy,
    /// Delete the selected item.
    Delete,
    /// Show folder properties.
    Properties,
    /// Re-read both panes.
    Refresh,

    // UI
    ToggleHelp,
    ToggleTheme,

    // Application
    Quit,
    ForceQuit,

    // No action
    None,
}

impl KeyAction {
    /// Convert a key event to an action.
    pub fn from_key_event(event: KeyEvent) -> Self {
        match (event.code, event.modifiers) {
            // Quit
            (KeyCode::F(10), _) => KeyAction::Quit,
            (KeyCode::Char('q'), KeyModifiers::NONE) => KeyAction::Quit,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::ForceQuit,

            // Navigation - vim style
            (KeyCode::Char('j'), KeyModifiers::NONE) => KeyAction::MoveDown,
            (KeyCode::Char('k'), KeyModifiers::NONE) => KeyAction::MoveUp,

            // Navigation - arrow keys
            (KeyCode::Down, _) => KeyAction::MoveDown,
            (KeyCode::Up, _) => KeyAction::MoveUp,

            // Jump
            (KeyCode::Left, _) => KeyAction::JumpToTop,
            (KeyCode::Right, _) => KeyAction::JumpToBottom,
            (KeyCode::Home, _) => KeyAction::JumpToTop,
            (KeyCode::End, _) => KeyAction::JumpToBottom,
            (KeyCode::Char('g'), KeyModifiers::NONE) => KeyAction::JumpToTop,
            (KeyCode::Char('G'), KeyModifiers::SHIFT) => KeyAction::JumpToBottom,

            // Page navigation
            (KeyCode::PageUp, _) => KeyAction::PageUp,
            (KeyCode::PageDown, _) => KeyAction::PageDown,
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => KeyAction::PageUp,
            (KeyCode::Char('d'), KeyModifiers::CONTROL) => KeyAction::PageDown,

            // Directory navigation
            (KeyCode::Enter, _) => KeyAction::Activate,
            (KeyCode::Backspace, _) => KeyAction::NavigateBack,
            (KeyCode::Char('-'), KeyModifiers::NONE) => KeyAction::NavigateBack,
            (KeyCode::F(2), _) => KeyAction::ShowVolumes,

            // Panes
            (KeyCode::Tab, _) => KeyAction::SwitchPane,
            (KeyCode::BackTab, _) => KeyAction::SwitchPane,

            // File operations
            (KeyCode::F(5), _) => KeyAction::Copy,
            (KeyCode::Char('c'), KeyModifiers::NONE) => KeyAction::Copy,
            (KeyCode::F(8), _) => KeyAction::Delete,
            (KeyCode::Delete, _) => KeyAction::Delete,
            (KeyCode::Char('d'), KeyModifiers::NONE) => KeyAction::Delete,
            (KeyCode::Char(' '), KeyModifiers::NONE) => KeyAction::Properties,
            (KeyCode::Char('i'), KeyModifiers::NONE) => KeyAction::Properties,
            (KeyCode::Char('R'), KeyModifiers::SHIFT) => KeyAction::Refresh,
            (KeyCode::F(6), _) => KeyAction::Refresh,

            // Help
            (KeyCode::F(1), _) => KeyAction::ToggleHelp,
            (KeyCode::Char('?'), _) => KeyAction::ToggleHelp,
            (KeyCode::Char('t'), KeyModifiers::NONE) => KeyAction::ToggleTheme,

            _ => KeyAction::None,
        }
    }
}

/// Answer to a two-button dialog, driven by the same keys everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKey {
    /// Move focus to the other button.
    Toggle,
    /// Press the focused button.
    Confirm,
    /// Pick a button by its letter.
    Pick(char),
    /// Any other key closes the dialog.
    Dismiss,
}

impl DialogKey {
    /// Classify a key pressed while a dialog is open.
    pub fn from_key_event(event: KeyEvent) -> Self {
        match event.code {
            KeyCode::Tab
            | KeyCode::BackTab
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Up
            | KeyCode::Down => DialogKey::Toggle,
            KeyCode::Enter => DialogKey::Confirm,
            KeyCode::Char(c) if c.is_ascii_alphabetic() => DialogKey::Pick(c.to_ascii_lowercase()),
            _ => DialogKey::Dismiss,
        }
    }
}

/// A section of key bindings for the help display.
pub struct HelpSection {
    pub title: &'static str,
    pub bindings: Vec<KeyBinding>,
}

/// Key binding for display in help.
pub struct KeyBinding {
    pub keys: &'static str,
    pub description: &'static str,
}

/// Get all key bindings organized by section for help display.
pub fn get_help_sections() -> Vec<HelpSection> {
    vec![
        HelpSection {
            title: "Navigation",
            bindings: vec![
                KeyBinding { keys: "j/k ↑/↓", description: "Move up/down" },
                KeyBinding { keys: "PgUp/PgDn", description: "Page up/down" },
                KeyBinding { keys: "← g Home", description: "Jump to top" },
                KeyBinding { keys: "→ G End", description: "Jump to bottom" },
                KeyBinding { keys: "Enter", description: "Open folder or launch file" },
                KeyBinding { keys: "Backspace/-", description: "Go to parent folder" },
                KeyBinding { keys: "F2", description: "Choose a volume" },
                KeyBinding { keys: "Tab", description: "Switch pane" },
            ],
        },
        HelpSection {
            title: "File Operations",
            bindings: vec![
                KeyBinding { keys: "F5/c", description: "Copy to the other pane" },
                KeyBinding { keys: "F8/d/Del", description: "Delete" },
                KeyBinding { keys: "Space/i", description: "Folder properties" },
                KeyBinding { keys: "F6/R", description: "Refresh both panes" },
            ],
        },
        HelpSection {
            title: "Attributes",
            bindings: vec![
                KeyBinding { keys: "R", description: "Read only" },
                KeyBinding { keys: "H", description: "Hidden" },
                KeyBinding { keys: "L", description: "Symbolic link" },
            ],
        },
        HelpSection {
            title: "Application",
            bindings: vec![
                KeyBinding { keys: "F1/?", description: "Show this help" },
                KeyBinding { keys: "t", description: "Toggle dark/light theme" },
                KeyBinding { keys: "F10/q", description: "Quit and remember folders" },
            ],
        },
    ]
}
