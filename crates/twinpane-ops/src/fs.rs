//! Filesystem provider used by the engines.

use std::fs;
use std::path::{Path, PathBuf};

use itertools::Itertools;
use twinpane_core::{Attributes, FileInfo, FsError, Volume};

use crate::volume::discover_volumes;

/// Filesystem access as seen by the listing, copy, delete and stats engines.
///
/// Directory checks follow symbolic links; `is_symlink` lets callers treat a
/// link as a leaf before descending into it.
pub trait FileSystem {
    /// Whether `path` is a directory (following links).
    fn is_dir(&self, path: &Path) -> bool;

    /// Whether `path` exists and is not a directory.
    fn is_file(&self, path: &Path) -> bool;

    /// Whether `path` itself is a symbolic link.
    fn is_symlink(&self, path: &Path) -> bool;

    /// Immediate subdirectories of `path`, in display order.
    fn list_dirs(&self, path: &Path) -> Result<Vec<PathBuf>, FsError>;

    /// Immediate non-directory children of `path`, in display order.
    fn list_files(&self, path: &Path) -> Result<Vec<PathBuf>, FsError>;

    /// Create a single directory. The parent must exist.
    fn create_dir(&self, path: &Path) -> Result<(), FsError>;

    /// Remove an empty directory.
    fn delete_dir(&self, path: &Path) -> Result<(), FsError>;

    /// Remove a file or a symbolic link.
    fn delete_file(&self, path: &Path) -> Result<(), FsError>;

    /// Copy a single file (or recreate a link) to `dest`, which must not exist.
    fn copy_file(&self, source: &Path, dest: &Path) -> Result<u64, FsError>;

    /// Metadata for one path, without following a final link.
    fn file_info(&self, path: &Path) -> Result<FileInfo, FsError>;

    /// Mounted volumes.
    fn volumes(&self) -> Result<Vec<Volume>, FsError>;

    /// Absolute form of an existing `path` with every link resolved.
    fn canonicalize(&self, path: &Path) -> Result<PathBuf, FsError>;
}

/// [`FileSystem`] over the local disk.
#[derive(Debug, Clone, Copy)]
pub struct LocalFs {
    /// Include dot-files in listings.
    pub include_hidden: bool,
}

impl Default for LocalFs {
    fn default() -> Self {
        Self {
            include_hidden: true,
        }
    }
}

impl LocalFs {
    /// Create a provider.
    pub fn new(include_hidden: bool) -> Self {
        Self { include_hidden }
    }

    /// Children of `path` split by the directory predicate, sorted by name
    /// ignoring case.
    fn children(&self, path: &Path, want_dirs: bool) -> Result<Vec<PathBuf>, FsError> {
        let entries = fs::read_dir(path).map_err(|e| FsError::io(path, e))?;

        let mut children = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| FsError::io(path, e))?;
            let child = entry.path();
            if !self.include_hidden && is_hidden_name(&child) {
                continue;
            }
            if self.is_dir(&child) == want_dirs {
                children.push(child);
            }
        }

        Ok(children
            .into_iter()
            .sorted_by_cached_key(|p| {
                p.file_name()
                    .map(|n| n.to_string_lossy().to_lowercase())
                    .unwrap_or_default()
            })
            .collect())
    }
}

fn is_hidden_name(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|n| n.to_string_lossy().starts_with('.'))
}

impl FileSystem for LocalFs {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok() && !path.is_dir()
    }

    fn is_symlink(&self, path: &Path) -> bool {
        path.is_symlink()
    }

    fn list_dirs(&self, path: &Path) -> Result<Vec<PathBuf>, FsError> {
        self.children(path, true)
    }

    fn list_files(&self, path: &Path) -> Result<Vec<PathBuf>, FsError> {
        self.children(path, false)
    }

    fn create_dir(&self, path: &Path) -> Result<(), FsError> {
        fs::create_dir(path).map_err(|e| FsError::io(path, e))
    }

    fn delete_dir(&self, path: &Path) -> Result<(), FsError> {
        fs::remove_dir(path).map_err(|e| FsError::io(path, e))
    }

    fn delete_file(&self, path: &Path) -> Result<(), FsError> {
        let result = fs::remove_file(path);
        // Windows directory links are removed like directories.
        #[cfg(windows)]
        let result = result.or_else(|e| {
            if path.is_symlink() {
                fs::remove_dir(path)
            } else {
                Err(e)
            }
        });
        result.map_err(|e| FsError::io(path, e))
    }

    fn copy_file(&self, source: &Path, dest: &Path) -> Result<u64, FsError> {
        if fs::symlink_metadata(dest).is_ok() {
            return Err(FsError::AlreadyExists {
                path: dest.to_path_buf(),
            });
        }

        #[cfg(unix)]
        {
            if source.is_symlink() {
                let target = fs::read_link(source).map_err(|e| FsError::io(source, e))?;
                std::os::unix::fs::symlink(&target, dest).map_err(|e| FsError::io(dest, e))?;
                return Ok(0);
            }
        }

        fs::copy(source, dest).map_err(|e| FsError::io(dest, e))
    }

    fn file_info(&self, path: &Path) -> Result<FileInfo, FsError> {
        let metadata = fs::symlink_metadata(path).map_err(|e| FsError::io(path, e))?;
        Ok(FileInfo {
            length: metadata.len(),
            created: metadata.created().ok(),
            modified: metadata.modified().ok(),
            attributes: Attributes {
                read_only: metadata.permissions().readonly(),
                hidden: is_hidden_name(path),
                symlink: metadata.file_type().is_symlink(),
            },
        })
    }

    fn volumes(&self) -> Result<Vec<Volume>, FsError> {
        Ok(discover_volumes())
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf, FsError> {
        fs::canonicalize(path).map_err(|e| FsError::io(path, e))
    }
}
