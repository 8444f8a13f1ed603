//! Recursive, children-first deletion.

use std::path::Path;

use twinpane_core::FsError;

use crate::executor::{OperationExecutor, is_blank};
use crate::notify::Notice;
use crate::progress::{OperationComplete, OperationType};
use crate::OperationError;

/// Deletes a file, a link, or a directory tree bottom-up.
///
/// A child that cannot be removed leaves its parent directory non-empty, so
/// the parent's removal fails too; siblings are still attempted.
pub(crate) struct DeletionEngine<'e, 'a> {
    exec: &'e OperationExecutor<'a>,
    silent: bool,
    result: OperationComplete,
}

impl<'e, 'a> DeletionEngine<'e, 'a> {
    pub(crate) fn new(exec: &'e OperationExecutor<'a>, silent: bool) -> Self {
        Self {
            exec,
            silent,
            result: OperationComplete::new(OperationType::Delete),
        }
    }

    pub(crate) fn run(mut self, path: &Path) -> OperationComplete {
        if !is_blank(path) {
            self.delete(path);
        }
        self.result
    }

    fn delete(&mut self, path: &Path) {
        let fs = self.exec.fs;

        if fs.is_symlink(path) || (fs.is_file(path) && !fs.is_dir(path)) {
            self.notify(path);
            match fs.delete_file(path) {
                Ok(()) => self.result.record_success(),
                Err(e) => self.fail(OperationError::transfer(&e)),
            }
        } else if fs.is_dir(path) {
            let dirs = fs.list_dirs(path).unwrap_or_else(|e| {
                self.fail(OperationError::enumeration(&e));
                Vec::new()
            });
            let files = fs.list_files(path).unwrap_or_else(|e| {
                self.fail(OperationError::enumeration(&e));
                Vec::new()
            });
            for child in dirs.iter().chain(files.iter()) {
                self.delete(child);
            }

            self.notify(path);
            match fs.delete_dir(path) {
                Ok(()) => self.result.record_success(),
                Err(e) => self.fail(OperationError::transfer(&e)),
            }
        } else {
            self.fail(OperationError::transfer(&FsError::not_found(path)));
        }
    }

    fn notify(&self, path: &Path) {
        tracing::debug!("deleting {}", path.display());
        if !self.silent {
            self.exec.notifier.notify(&Notice::Deleting {
                path: path.to_path_buf(),
            });
        }
    }

    fn fail(&mut self, error: OperationError) {
        self.exec.report(error, &mut self.result);
    }
}
