//! Terminal user interface for twinpane.
//!
//! Two side-by-side panes, each showing one folder (or the list of volumes),
//! with keyboard navigation and blocking copy, delete and folder-properties
//! operations, built with ratatui.
//!
//! # Usage
//!
//! ```rust,no_run
//! use twinpane_core::BrowserConfig;
//! use twinpane_tui::UserSettings;
//!
//! let config = BrowserConfig::builder()
//!     .left_root("/home")
//!     .right_root("/tmp")
//!     .build()
//!     .unwrap();
//! twinpane_tui::run(config, UserSettings::load()).unwrap();
//! ```
//!
//! # Keyboard Navigation
//!
//! - `↑`/`↓`, `j`/`k` - Move up/down
//! - `←`/`→` - Jump to top/bottom
//! - `Enter` - Open folder or launch file
//! - `Tab` - Switch pane
//! - `F5` - Copy to the other pane
//! - `F8` - Delete
//! - `Space` - Folder properties
//! - `F1` - Help
//! - `F10` - Quit

pub mod app;
mod dialogs;
mod event;
pub mod pane;
mod theme;
mod ui;

pub use app::state::UserSettings;
pub use app::{App, AppResult};
pub use pane::{Activation, PaneState, RefreshMode};
pub use theme::{Theme, ThemeVariant};

use twinpane_core::BrowserConfig;

/// Run the TUI application.
pub fn run(config: BrowserConfig, settings: UserSettings) -> AppResult<()> {
    let terminal = ratatui::init();
    let result = App::new(config, settings).run(terminal);
    ratatui::restore();
    result
}
