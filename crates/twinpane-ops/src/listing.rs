//! Building pane listings.

use std::path::{Path, PathBuf};

use twinpane_core::{Entry, EntryList, FsError, Volume};

use crate::executor::{OperationExecutor, is_blank};
use crate::{FailureKind, OperationError};

/// What happened when a path was opened in a pane.
#[derive(Debug)]
pub enum ListOutcome {
    /// A directory or the volume view was listed.
    Listed(EntryList),
    /// The path was a file and was handed to the launcher.
    Launched(PathBuf),
    /// Listing or launching failed; the pane should stay as it was.
    Failed(OperationError),
}

impl ListOutcome {
    /// The listing, if one was produced.
    pub fn listed(self) -> Option<EntryList> {
        match self {
            Self::Listed(list) => Some(list),
            _ => None,
        }
    }
}

/// Produces the listing for a path, falling back to the volume view.
pub(crate) struct EntryLister<'e, 'a> {
    exec: &'e OperationExecutor<'a>,
}

impl<'e, 'a> EntryLister<'e, 'a> {
    pub(crate) fn new(exec: &'e OperationExecutor<'a>) -> Self {
        Self { exec }
    }

    pub(crate) fn list(&self, path: &Path) -> ListOutcome {
        let fs = self.exec.fs;

        if is_blank(path) || (!fs.is_dir(path) && !fs.is_file(path)) {
            tracing::debug!("listing volumes for {:?}", path);
            return self.list_volumes();
        }

        if fs.is_dir(path) {
            return match self.list_directory(path) {
                Ok(list) => ListOutcome::Listed(list),
                Err(e) => self.fail(OperationError::enumeration(&e)),
            };
        }

        match self.exec.launcher.open(path) {
            Ok(()) => {
                tracing::debug!("launched {}", path.display());
                ListOutcome::Launched(path.to_path_buf())
            }
            Err(e) => self.fail(OperationError::from_fs(&e, FailureKind::Launch)),
        }
    }

    fn list_directory(&self, path: &Path) -> Result<EntryList, FsError> {
        let fs = self.exec.fs;
        let dirs = fs.list_dirs(path)?;
        let files = fs.list_files(path)?;
        tracing::debug!(
            "listed {}: {} folders, {} files",
            path.display(),
            dirs.len(),
            files.len()
        );
        Ok(EntryList::directory(
            path,
            dirs.into_iter().map(Entry::folder),
            files.into_iter().map(Entry::file),
        ))
    }

    fn list_volumes(&self) -> ListOutcome {
        match self.exec.fs.volumes() {
            Ok(volumes) => ListOutcome::Listed(EntryList::volumes(
                volumes.iter().map(Volume::to_entry),
            )),
            Err(e) => self.fail(OperationError::enumeration(&e)),
        }
    }

    fn fail(&self, error: OperationError) -> ListOutcome {
        self.exec.log_failure(&error);
        ListOutcome::Failed(error)
    }
}
