//! Folder statistics.

use std::iter::Sum;
use std::ops::Add;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::executor::is_blank;
use crate::fs::FileSystem;

/// Recursive totals below a path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderStats {
    /// Number of folders (not counting the root itself).
    pub dirs: u64,
    /// Number of files.
    pub files: u64,
    /// Sum of file lengths in bytes.
    pub bytes: u64,
}

impl FolderStats {
    /// Create stats from raw counts.
    pub fn new(dirs: u64, files: u64, bytes: u64) -> Self {
        Self { dirs, files, bytes }
    }
}

impl Add for FolderStats {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            dirs: self.dirs + rhs.dirs,
            files: self.files + rhs.files,
            bytes: self.bytes + rhs.bytes,
        }
    }
}

impl Sum for FolderStats {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// Pure recursive reducer over a [`FileSystem`].
pub(crate) struct StatsCollector<'a> {
    fs: &'a dyn FileSystem,
}

impl<'a> StatsCollector<'a> {
    pub(crate) fn new(fs: &'a dyn FileSystem) -> Self {
        Self { fs }
    }

    pub(crate) fn collect(&self, path: &Path) -> FolderStats {
        if is_blank(path) {
            return FolderStats::default();
        }
        if self.fs.is_symlink(path) {
            // Links are leaves: a linked file has its own length, a linked
            // folder is counted by its parent only.
            return if self.fs.is_dir(path) {
                FolderStats::default()
            } else {
                self.file(path)
            };
        }
        if self.fs.is_dir(path) {
            self.folder(path)
        } else if self.fs.is_file(path) {
            self.file(path)
        } else {
            FolderStats::default()
        }
    }

    fn folder(&self, path: &Path) -> FolderStats {
        let dirs = match self.fs.list_dirs(path) {
            Ok(dirs) => {
                let nested: FolderStats = dirs.iter().map(|d| self.collect(d)).sum();
                FolderStats::new(dirs.len() as u64, 0, 0) + nested
            }
            Err(e) => {
                tracing::debug!("stats skipped folders of {}: {}", path.display(), e);
                FolderStats::default()
            }
        };

        let files = match self.fs.list_files(path) {
            Ok(files) => {
                let nested: FolderStats = files.iter().map(|f| self.collect(f)).sum();
                FolderStats::new(0, files.len() as u64, 0) + nested
            }
            Err(e) => {
                tracing::debug!("stats skipped files of {}: {}", path.display(), e);
                FolderStats::default()
            }
        };

        dirs + files
    }

    fn file(&self, path: &Path) -> FolderStats {
        match self.fs.file_info(path) {
            Ok(info) => FolderStats::new(0, 0, info.length),
            Err(_) => FolderStats::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_sum() {
        let total: FolderStats = [FolderStats::new(1, 2, 3), FolderStats::new(4, 5, 6)]
            .into_iter()
            .sum();
        assert_eq!(total, FolderStats::new(5, 7, 9));
        assert_eq!(FolderStats::default() + total, total);
    }
}
