//! File metadata and volume descriptions.

use std::path::PathBuf;
use std::time::SystemTime;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::entry::Entry;

/// Attribute flags shown next to an entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    /// Write permission is missing.
    pub read_only: bool,
    /// Dot-file, or flagged hidden by the platform.
    pub hidden: bool,
    /// The path itself is a symbolic link.
    pub symlink: bool,
}

impl Attributes {
    /// Compact flag string, one column per attribute (`R`, `H`, `L`).
    pub fn flags(&self) -> String {
        [
            (self.read_only, 'R'),
            (self.hidden, 'H'),
            (self.symlink, 'L'),
        ]
        .iter()
        .map(|&(set, flag)| if set { flag } else { '-' })
        .collect()
    }
}

/// Metadata for a single file or directory.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FileInfo {
    /// Length in bytes (the link itself for symlinks).
    pub length: u64,
    /// Creation time (if available, platform-dependent).
    pub created: Option<SystemTime>,
    /// Last modification time (if available).
    pub modified: Option<SystemTime>,
    /// Attribute flags.
    pub attributes: Attributes,
}

impl FileInfo {
    /// Create info with only a length.
    pub fn with_length(length: u64) -> Self {
        Self {
            length,
            created: None,
            modified: None,
            attributes: Attributes::default(),
        }
    }

    /// Best timestamp to show: creation time, falling back to modification.
    pub fn display_time(&self) -> Option<SystemTime> {
        self.created.or(self.modified)
    }
}

/// A mounted storage volume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volume {
    /// Display name (drive letter or mount point).
    pub name: CompactString,
    /// Root directory of the volume.
    pub root: PathBuf,
    /// Total capacity in bytes, when the platform reports it.
    pub total_size: Option<u64>,
}

impl Volume {
    /// Create a new volume.
    pub fn new(name: impl Into<CompactString>, root: impl Into<PathBuf>, total_size: Option<u64>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
            total_size,
        }
    }

    /// Convert into a listing entry.
    pub fn to_entry(&self) -> Entry {
        Entry::volume(self.name.clone(), self.root.clone())
    }
}
