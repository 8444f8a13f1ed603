//! Directory entry types.

use std::path::{Path, PathBuf};

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use strum::Display;

/// Name shown for the reserved "go up" entry at index 0.
pub const PARENT_ENTRY_NAME: &str = "..";

/// Type of an entry in a pane listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum EntryKind {
    /// A storage volume (or the way back to the volume list).
    #[strum(serialize = "volume")]
    Volume,
    /// A directory.
    #[strum(serialize = "folder")]
    Folder,
    /// A regular file, symlink or anything else that is not a directory.
    #[strum(serialize = "file")]
    File,
}

impl EntryKind {
    /// Whether selecting an entry of this kind opens a new listing.
    pub fn is_container(&self) -> bool {
        matches!(self, Self::Volume | Self::Folder)
    }
}

/// A single row of a pane listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Display name (not the full path).
    pub name: CompactString,
    /// Full path; empty for the link back to the volume list.
    pub path: PathBuf,
    /// Entry type.
    pub kind: EntryKind,
}

impl Entry {
    /// Create a new entry.
    pub fn new(name: impl Into<CompactString>, path: impl Into<PathBuf>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind,
        }
    }

    /// Create a folder entry named after the last component of `path`.
    pub fn folder(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self::new(display_name(&path), path, EntryKind::Folder)
    }

    /// Create a file entry named after the last component of `path`.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self::new(display_name(&path), path, EntryKind::File)
    }

    /// Create a volume entry.
    pub fn volume(name: impl Into<CompactString>, root: impl Into<PathBuf>) -> Self {
        Self::new(name, root, EntryKind::Volume)
    }

    /// Create the reserved "go up" entry for a directory.
    ///
    /// A directory without a parent links back to the volume list, which is
    /// represented by a volume entry with an empty path.
    pub fn parent_of(dir: &Path) -> Self {
        match dir.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => Self::new(PARENT_ENTRY_NAME, parent, EntryKind::Folder),
            None => Self::new(PARENT_ENTRY_NAME, PathBuf::new(), EntryKind::Volume),
        }
    }

    /// Check if this is a directory.
    pub fn is_folder(&self) -> bool {
        self.kind == EntryKind::Folder
    }

    /// Check if this is a file.
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    /// Check if this is a volume.
    pub fn is_volume(&self) -> bool {
        self.kind == EntryKind::Volume
    }
}

/// Last path component, or the whole path for roots like `/` or `C:\`.
pub fn display_name(path: &Path) -> CompactString {
    match path.file_name() {
        Some(name) => CompactString::from(name.to_string_lossy()),
        None => CompactString::from(path.to_string_lossy()),
    }
}

/// An ordered listing of one directory or of the available volumes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryList {
    /// Directory this listing was taken from; empty for the volume view.
    root: PathBuf,
    /// Entries in display order.
    entries: Vec<Entry>,
}

impl EntryList {
    /// Build a directory listing: the reserved parent entry, then folders,
    /// then files.
    pub fn directory(
        root: impl Into<PathBuf>,
        folders: impl IntoIterator<Item = Entry>,
        files: impl IntoIterator<Item = Entry>,
    ) -> Self {
        let root = root.into();
        let mut entries = vec![Entry::parent_of(&root)];
        entries.extend(folders);
        entries.extend(files);
        Self { root, entries }
    }

    /// Build the volume view. No reserved entry is prepended.
    pub fn volumes(volumes: impl IntoIterator<Item = Entry>) -> Self {
        Self {
            root: PathBuf::new(),
            entries: volumes.into_iter().collect(),
        }
    }

    /// Directory this listing shows; empty for the volume view.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Check if this is the volume view.
    pub fn is_volume_view(&self) -> bool {
        self.root.as_os_str().is_empty()
    }

    /// Whether index 0 is the reserved "go up" entry.
    pub fn has_parent_entry(&self) -> bool {
        !self.is_volume_view()
    }

    /// Check whether `index` points at the reserved "go up" entry.
    pub fn is_parent_index(&self, index: usize) -> bool {
        index == 0 && self.has_parent_entry()
    }

    /// Number of entries, including the reserved one.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the listing has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the entry at `index`.
    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// Iterate over all entries in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Position of the entry with the given path.
    pub fn position_of(&self, path: &Path) -> Option<usize> {
        self.entries.iter().position(|e| e.path == path)
    }
}

impl<'a> IntoIterator for &'a EntryList {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
