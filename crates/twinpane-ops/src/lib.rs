//! Listing and file operations for twinpane.
//!
//! This crate provides the blocking engines behind both panes: listing a
//! directory (or the volumes), recursive copy with conflict resolution,
//! recursive delete, and folder statistics. Collaborators (filesystem,
//! notifier, error sink, launcher, conflict resolver) are injected as traits
//! so the same engines serve the terminal UI, the command line and tests.

mod conflict;
mod copy;
mod delete;
mod executor;
mod fs;
mod launcher;
mod listing;
mod notify;
mod operation;
mod progress;
mod sink;
mod stats;
mod volume;

pub use conflict::{
    Conflict, ConflictKind, ConflictOutcome, ConflictResolver, FixedResolver, ScriptedResolver,
};
pub use executor::OperationExecutor;
pub use fs::{FileSystem, LocalFs};
pub use launcher::{Launcher, SystemLauncher};
pub use listing::ListOutcome;
pub use notify::{Notice, Notifier, RecordingNotifier, SilentNotifier};
pub use operation::{FailureKind, OperationError};
pub use progress::{OperationComplete, OperationType};
pub use sink::{ErrorLog, ErrorSink, MemorySink};
pub use stats::FolderStats;
pub use volume::discover_volumes;
