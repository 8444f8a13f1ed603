//! High-level operation executor shared by the front ends.

use std::path::Path;

use crate::conflict::ConflictResolver;
use crate::copy::TransferEngine;
use crate::delete::DeletionEngine;
use crate::fs::FileSystem;
use crate::launcher::{Launcher, SystemLauncher};
use crate::listing::{EntryLister, ListOutcome};
use crate::notify::{Notice, Notifier, SilentNotifier};
use crate::progress::OperationComplete;
use crate::sink::ErrorSink;
use crate::stats::{FolderStats, StatsCollector};
use crate::OperationError;

/// Runs listings and file operations against one set of collaborators.
///
/// Every operation runs to completion on the calling thread. Per-item
/// failures go to the error sink and the notifier and are counted in the
/// returned summary; they never abort the operation.
#[derive(Clone, Copy)]
pub struct OperationExecutor<'a> {
    pub(crate) fs: &'a dyn FileSystem,
    pub(crate) errors: &'a dyn ErrorSink,
    pub(crate) notifier: &'a dyn Notifier,
    pub(crate) launcher: &'a dyn Launcher,
}

impl<'a> OperationExecutor<'a> {
    /// Create an executor that launches with the system opener and shows no
    /// notices.
    pub fn new(fs: &'a dyn FileSystem, errors: &'a dyn ErrorSink) -> Self {
        Self {
            fs,
            errors,
            notifier: &SilentNotifier,
            launcher: &SystemLauncher,
        }
    }

    /// Set the notifier.
    pub fn with_notifier(mut self, notifier: &'a dyn Notifier) -> Self {
        self.notifier = notifier;
        self
    }

    /// Set the launcher used for files opened from a pane.
    pub fn with_launcher(mut self, launcher: &'a dyn Launcher) -> Self {
        self.launcher = launcher;
        self
    }

    /// The filesystem provider.
    pub fn fs(&self) -> &'a dyn FileSystem {
        self.fs
    }

    /// List `path` for a pane, launch it if it is a file, or list the volumes
    /// if it is blank or missing.
    pub fn list(&self, path: &Path) -> ListOutcome {
        EntryLister::new(self).list(path)
    }

    /// Copy `source` into the directory `dest_dir`.
    ///
    /// Conflicts go to `resolver` unless `force_replace` is set, in which case
    /// existing items are replaced without asking.
    pub fn copy(
        &self,
        source: &Path,
        dest_dir: &Path,
        force_replace: bool,
        resolver: &dyn ConflictResolver,
    ) -> OperationComplete {
        TransferEngine::new(self, resolver).run(source, dest_dir, force_replace)
    }

    /// Delete `path` recursively, children first. `silent` suppresses the
    /// per-item notices (failures are still shown).
    pub fn delete(&self, path: &Path, silent: bool) -> OperationComplete {
        DeletionEngine::new(self, silent).run(path)
    }

    /// Count folders, files and bytes below `path`.
    pub fn stats(&self, path: &Path) -> FolderStats {
        StatsCollector::new(self.fs).collect(path)
    }

    /// Write a failure to the error sink.
    pub(crate) fn log_failure(&self, error: &OperationError) {
        tracing::warn!("{} failed for {}: {}", error.kind, error.path.display(), error.message);
        self.errors.log(error);
    }

    /// Log a failure, show it once, and count it.
    pub(crate) fn report(&self, error: OperationError, result: &mut OperationComplete) {
        self.log_failure(&error);
        self.notifier.notify(&Notice::Failed(error.clone()));
        result.record_failure(error);
    }
}

impl std::fmt::Debug for OperationExecutor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperationExecutor").finish_non_exhaustive()
    }
}

/// Empty or whitespace-only paths mean "nothing selected".
pub(crate) fn is_blank(path: &Path) -> bool {
    path.to_string_lossy().trim().is_empty()
}
