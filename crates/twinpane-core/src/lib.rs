//! Core types for twinpane.
//!
//! This crate holds the data model shared by the operation engines and the
//! front ends: listings and entries, file metadata, the pane viewport and
//! selection history, configuration, and filesystem errors.

mod config;
mod entry;
mod error;
mod history;
mod info;
mod viewport;

pub use config::{BrowserConfig, BrowserConfigBuilder, DEFAULT_ERROR_LOG};
pub use entry::{Entry, EntryKind, EntryList, PARENT_ENTRY_NAME, display_name};
pub use error::FsError;
pub use history::SelectionHistory;
pub use info::{Attributes, FileInfo, Volume};
pub use viewport::Viewport;
