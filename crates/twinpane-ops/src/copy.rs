//! Recursive copy with interactive conflict resolution.

use std::path::{Path, PathBuf};

use twinpane_core::FsError;

use crate::conflict::{Conflict, ConflictOutcome, ConflictResolver};
use crate::delete::DeletionEngine;
use crate::executor::{OperationExecutor, is_blank};
use crate::notify::Notice;
use crate::progress::{OperationComplete, OperationType};
use crate::{FailureKind, OperationError};

/// Copies one item into a destination directory.
///
/// Folders are copied subfolders first, then files. A conflict is decided
/// once for the item that clashes: replacing a folder removes it and copies
/// the source again, while Skip or Cancel leave that item and everything
/// below it untouched. When the old folder cannot be removed completely, the
/// source is merged into what is left and every nested clash is replaced.
///
/// Self-copy checks compare real paths, so a destination reached through a
/// link is recognized as the source or as a folder inside it.
pub(crate) struct TransferEngine<'e, 'a> {
    exec: &'e OperationExecutor<'a>,
    resolver: &'e dyn ConflictResolver,
    result: OperationComplete,
}

impl<'e, 'a> TransferEngine<'e, 'a> {
    pub(crate) fn new(exec: &'e OperationExecutor<'a>, resolver: &'e dyn ConflictResolver) -> Self {
        Self {
            exec,
            resolver,
            result: OperationComplete::new(OperationType::Copy),
        }
    }

    pub(crate) fn run(mut self, source: &Path, dest_dir: &Path, force_replace: bool) -> OperationComplete {
        if is_blank(source) || is_blank(dest_dir) || source == dest_dir {
            return self.result;
        }
        if self.real_path(source) == self.real_dir(dest_dir) {
            return self.result;
        }
        self.copy(source, dest_dir, force_replace);
        self.result
    }

    fn copy(&mut self, source: &Path, dest_dir: &Path, force_replace: bool) {
        let fs = self.exec.fs;

        if fs.is_symlink(source) || (fs.is_file(source) && !fs.is_dir(source)) {
            self.copy_file(source, dest_dir, force_replace);
        } else if fs.is_dir(source) {
            self.copy_dir(source, dest_dir, force_replace);
        } else {
            self.fail(OperationError::transfer(&FsError::not_found(source)));
        }
    }

    fn copy_file(&mut self, source: &Path, dest_dir: &Path, force_replace: bool) {
        let Some(dest) = self.destination(source, dest_dir) else {
            return;
        };
        if dest == source || self.real_target(source, dest_dir) == self.real_path(source) {
            return;
        }

        if self.exists(&dest) {
            let conflict = self.conflict(source, &dest);
            if !self.decide(&conflict, force_replace) {
                return;
            }
            if !self.remove_existing(&dest) {
                tracing::debug!("{} still present, copy will fail", dest.display());
            }
        }

        self.exec.notifier.notify(&Notice::Copying {
            source: source.to_path_buf(),
            destination: dest_dir.to_path_buf(),
        });
        match self.exec.fs.copy_file(source, &dest) {
            Ok(bytes) => {
                tracing::debug!("copied {} ({} bytes)", source.display(), bytes);
                self.result.record_success();
            }
            Err(e) => self.fail(OperationError::transfer(&e)),
        }
    }

    fn copy_dir(&mut self, source: &Path, dest_dir: &Path, force_replace: bool) {
        let Some(dest_sub) = self.destination(source, dest_dir) else {
            return;
        };
        let real_source = self.real_path(source);
        let real_dest_sub = self.real_target(source, dest_dir);
        if dest_sub == source || real_dest_sub == real_source {
            return;
        }
        if dest_sub.starts_with(source) || real_dest_sub.starts_with(&real_source) {
            self.fail(OperationError::new(
                &dest_sub,
                "Cannot copy a directory into itself",
                FailureKind::Transfer,
            ));
            return;
        }

        if !self.exists(&dest_sub) {
            self.create_and_fill(source, dest_dir, &dest_sub);
            return;
        }

        let conflict = self.conflict(source, &dest_sub);
        if !self.decide(&conflict, force_replace) {
            return;
        }

        self.remove_existing(&dest_sub);
        if !self.exists(&dest_sub) {
            self.create_and_fill(source, dest_dir, &dest_sub);
        } else if self.exec.fs.is_dir(&dest_sub) {
            // Partial delete: merge into what is left, replacing every clash.
            self.copy_children(source, &dest_sub, true);
        }
    }

    fn create_and_fill(&mut self, source: &Path, dest_dir: &Path, dest_sub: &Path) {
        self.exec.notifier.notify(&Notice::Copying {
            source: source.to_path_buf(),
            destination: dest_dir.to_path_buf(),
        });
        if let Err(e) = self.exec.fs.create_dir(dest_sub) {
            self.fail(OperationError::transfer(&e));
            return;
        }
        self.result.record_success();
        self.copy_children(source, dest_sub, false);
    }

    fn copy_children(&mut self, source: &Path, dest_sub: &Path, force_replace: bool) {
        let fs = self.exec.fs;
        // Folders and files are enumerated independently; a failure leaves
        // that group empty.
        let dirs = fs.list_dirs(source).unwrap_or_else(|e| {
            self.fail(OperationError::enumeration(&e));
            Vec::new()
        });
        let files = fs.list_files(source).unwrap_or_else(|e| {
            self.fail(OperationError::enumeration(&e));
            Vec::new()
        });

        for child in dirs.iter().chain(files.iter()) {
            self.copy(child, dest_sub, force_replace);
        }
    }

    /// `dest_dir/basename(source)`, or a recorded failure when `dest_dir` is
    /// not a directory.
    fn destination(&mut self, source: &Path, dest_dir: &Path) -> Option<PathBuf> {
        if !self.exec.fs.is_dir(dest_dir) {
            self.fail(OperationError::transfer(&FsError::not_a_directory(dest_dir)));
            return None;
        }
        let Some(name) = source.file_name() else {
            self.fail(OperationError::new(source, "Source has no name", FailureKind::Transfer));
            return None;
        };
        Some(dest_dir.join(name))
    }

    /// `path` with the links of its parent resolved. A final link is kept,
    /// so a copied link is compared as the link itself.
    fn real_path(&self, path: &Path) -> PathBuf {
        match (path.parent(), path.file_name()) {
            (Some(parent), Some(name)) if !parent.as_os_str().is_empty() => self
                .exec
                .fs
                .canonicalize(parent)
                .map(|parent| parent.join(name))
                .unwrap_or_else(|_| path.to_path_buf()),
            _ => self.real_dir(path),
        }
    }

    /// `dir` with every link resolved, including a final one.
    fn real_dir(&self, dir: &Path) -> PathBuf {
        self.exec
            .fs
            .canonicalize(dir)
            .unwrap_or_else(|_| dir.to_path_buf())
    }

    /// Where `source` would really land inside `dest_dir`.
    fn real_target(&self, source: &Path, dest_dir: &Path) -> PathBuf {
        let real = self.real_dir(dest_dir);
        match source.file_name() {
            Some(name) => real.join(name),
            None => real,
        }
    }

    fn exists(&self, path: &Path) -> bool {
        self.exec.fs.is_dir(path) || self.exec.fs.is_file(path)
    }

    fn conflict(&self, source: &Path, dest: &Path) -> Conflict {
        if self.exec.fs.is_dir(dest) && !self.exec.fs.is_symlink(dest) {
            Conflict::directory_exists(source.to_path_buf(), dest.to_path_buf())
        } else {
            Conflict::file_exists(source.to_path_buf(), dest.to_path_buf())
        }
    }

    /// Whether to replace. Skip and Cancel count the item as skipped.
    fn decide(&mut self, conflict: &Conflict, force_replace: bool) -> bool {
        let outcome = if force_replace {
            ConflictOutcome::Replace
        } else {
            self.resolver.resolve(conflict)
        };
        tracing::debug!("{}: {:?}", conflict.destination.display(), outcome);

        if outcome.is_replace() {
            true
        } else {
            self.result.record_skip();
            false
        }
    }

    /// Remove whatever occupies `dest`. Returns whether it is gone.
    fn remove_existing(&mut self, dest: &Path) -> bool {
        if self.exec.fs.is_dir(dest) && !self.exec.fs.is_symlink(dest) {
            let deleted = DeletionEngine::new(self.exec, false).run(dest);
            self.result.failed += deleted.failed;
            self.result.errors.extend(deleted.errors);
        } else if let Err(e) = self.exec.fs.delete_file(dest) {
            self.fail(OperationError::transfer(&e));
        }
        !self.exists(dest)
    }

    fn fail(&mut self, error: OperationError) {
        self.exec.report(error, &mut self.result);
    }
}
