//! State of one browser pane.
//!
//! A pane owns its listing, the scrolling window over it and the history of
//! selections made on the way down the directory tree. Every operation that
//! lists a path goes through an [`OperationExecutor`] and only commits the new
//! state once the listing succeeded, so a failed navigation leaves the pane
//! exactly as it was.

use std::path::{Path, PathBuf};

use twinpane_core::{Entry, EntryList, SelectionHistory, Viewport};
use twinpane_ops::{ListOutcome, OperationError, OperationExecutor};

/// Result of activating the selected entry.
#[derive(Debug)]
pub enum Activation {
    /// A new listing is shown.
    Opened,
    /// The selected file was handed to the launcher.
    Launched(PathBuf),
    /// Listing or launching failed; the pane is unchanged.
    Failed(OperationError),
    /// There was nothing to activate.
    Nothing,
}

/// How [`PaneState::refresh`] places the selection on the new listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshMode {
    /// Select the first row and rebuild the window.
    Reset,
    /// Keep selection and window, clamped to the new listing.
    Keep,
    /// Move selection and window back one row, after the selected row was
    /// removed.
    StepBack,
}

/// One pane: listing, viewport and selection history.
#[derive(Debug, Clone)]
pub struct PaneState {
    entries: EntryList,
    viewport: Viewport,
    history: SelectionHistory,
    capacity: usize,
}

impl PaneState {
    /// Open `path`, falling back to the volume view when it cannot be listed.
    pub fn open(exec: &OperationExecutor<'_>, path: &Path, capacity: usize) -> Self {
        let entries = match exec.list(path) {
            ListOutcome::Listed(list) => list,
            other => {
                tracing::debug!("cannot open {} in a pane: {:?}", path.display(), other);
                exec.list(Path::new("")).listed().unwrap_or_default()
            }
        };

        let mut pane = Self {
            entries,
            viewport: Viewport::default(),
            history: SelectionHistory::new(),
            capacity: capacity.max(1),
        };
        pane.recompute();
        pane
    }

    /// Directory shown; empty for the volume view.
    pub fn root(&self) -> &Path {
        self.entries.root()
    }

    /// The listing shown.
    pub fn entries(&self) -> &EntryList {
        &self.entries
    }

    /// The current window and selection.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Rows of screen space available to the listing.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of folders entered below the first listing.
    pub fn depth(&self) -> usize {
        self.history.depth()
    }

    /// The selected entry, if the listing is not empty.
    pub fn selected_entry(&self) -> Option<&Entry> {
        self.entries.get(self.viewport.selected)
    }

    /// Whether the selection is on the reserved "go up" row.
    pub fn is_parent_selected(&self) -> bool {
        self.entries.is_parent_index(self.viewport.selected)
    }

    /// The selected entry, unless it is the reserved row or the listing is
    /// empty. Copy, delete and stats act on this.
    pub fn selected_item(&self) -> Option<&Entry> {
        if self.is_parent_selected() {
            None
        } else {
            self.selected_entry()
        }
    }

    /// Update the available rows (after a resize) and fix up the window.
    pub fn set_capacity(&mut self, capacity: usize) {
        let capacity = capacity.max(1);
        if capacity != self.capacity {
            self.capacity = capacity;
            self.recompute();
        }
    }

    /// Move the selection one row up.
    pub fn move_up(&mut self) {
        self.viewport.selected = self.viewport.selected.saturating_sub(1);
        self.recompute();
    }

    /// Move the selection one row down.
    pub fn move_down(&mut self) {
        if self.viewport.selected + 1 < self.entries.len() {
            self.viewport.selected += 1;
        }
        self.recompute();
    }

    /// Move up by a screenful, one row at a time.
    pub fn page_up(&mut self) {
        for _ in 0..self.page_len() {
            self.move_up();
        }
    }

    /// Move down by a screenful, one row at a time.
    pub fn page_down(&mut self) {
        for _ in 0..self.page_len() {
            self.move_down();
        }
    }

    /// Select the first row.
    pub fn jump_to_top(&mut self) {
        self.viewport.selected = 0;
        self.viewport.reset();
        self.recompute();
    }

    /// Select the last row.
    pub fn jump_to_bottom(&mut self) {
        self.viewport.selected = self.entries.len().saturating_sub(1);
        self.viewport.reset();
        self.recompute();
    }

    /// Open the selected entry.
    ///
    /// The reserved row returns to the parent and restores the row selected
    /// there; any other folder or volume is entered with the first row
    /// selected; a file is launched.
    pub fn activate(&mut self, exec: &OperationExecutor<'_>) -> Activation {
        let Some(entry) = self.selected_entry().cloned() else {
            return Activation::Nothing;
        };

        if self.is_parent_selected() {
            self.return_to(exec, &entry.path)
        } else if entry.kind.is_container() {
            self.enter(exec, &entry.path)
        } else {
            match exec.list(&entry.path) {
                ListOutcome::Launched(path) => Activation::Launched(path),
                ListOutcome::Failed(error) => Activation::Failed(error),
                // The file turned into a folder or vanished since it was listed.
                ListOutcome::Listed(list) => {
                    self.commit(list, Viewport::default());
                    self.history.clear();
                    Activation::Opened
                }
            }
        }
    }

    /// Return to the parent directory, whatever is selected.
    pub fn go_up(&mut self, exec: &OperationExecutor<'_>) -> Activation {
        if !self.entries.has_parent_entry() {
            return Activation::Nothing;
        }
        match self.entries.get(0).map(|e| e.path.clone()) {
            Some(parent) => self.return_to(exec, &parent),
            None => Activation::Nothing,
        }
    }

    /// Switch to the volume view and forget the selection history.
    pub fn show_volumes(&mut self, exec: &OperationExecutor<'_>) -> Result<(), OperationError> {
        match exec.list(Path::new("")) {
            ListOutcome::Listed(list) => {
                let selected = list.position_of(self.volume_of_root(&list)).unwrap_or(0);
                self.commit(list, Viewport::with_selected(selected));
                self.history.clear();
                Ok(())
            }
            ListOutcome::Failed(error) => Err(error),
            ListOutcome::Launched(_) => Ok(()),
        }
    }

    /// List the current root again.
    pub fn refresh(&mut self, exec: &OperationExecutor<'_>, mode: RefreshMode) -> Result<(), OperationError> {
        let root = self.root().to_path_buf();
        let list = match exec.list(&root) {
            ListOutcome::Listed(list) => list,
            ListOutcome::Failed(error) => return Err(error),
            ListOutcome::Launched(_) => return Ok(()),
        };

        if list.root() != root {
            // The folder is gone and the volume view took its place.
            tracing::debug!("{} vanished, showing volumes", root.display());
            self.commit(list, Viewport::default());
            self.history.clear();
            return Ok(());
        }

        let viewport = match mode {
            RefreshMode::Reset => Viewport::default(),
            RefreshMode::Keep => self.viewport,
            RefreshMode::StepBack => {
                let vp = self.viewport;
                Viewport {
                    first_visible: vp.first_visible.saturating_sub(1),
                    last_visible: vp.last_visible.saturating_sub(1),
                    selected: vp.selected.saturating_sub(1),
                }
            }
        };
        self.commit(list, viewport);
        Ok(())
    }

    fn enter(&mut self, exec: &OperationExecutor<'_>, path: &Path) -> Activation {
        match exec.list(path) {
            ListOutcome::Listed(list) => {
                let mut history = self.history.clone();
                let selected = history.enter_child(self.viewport.selected);
                self.history = history;
                self.commit(list, Viewport::with_selected(selected));
                Activation::Opened
            }
            ListOutcome::Launched(path) => Activation::Launched(path),
            ListOutcome::Failed(error) => Activation::Failed(error),
        }
    }

    fn return_to(&mut self, exec: &OperationExecutor<'_>, parent: &Path) -> Activation {
        let child = self.root().to_path_buf();
        match exec.list(parent) {
            ListOutcome::Listed(list) => {
                let mut history = self.history.clone();
                let selected = if history.is_empty() {
                    // Opened deep from the command line: find the folder we
                    // came from instead.
                    list.position_of(&child).unwrap_or(0)
                } else {
                    history.return_to_parent()
                };
                self.history = history;
                self.commit(list, Viewport::with_selected(selected));
                Activation::Opened
            }
            ListOutcome::Launched(path) => Activation::Launched(path),
            ListOutcome::Failed(error) => Activation::Failed(error),
        }
    }

    /// The volume entry containing the current root, for the initial
    /// selection of the volume view.
    fn volume_of_root<'l>(&self, volumes: &'l EntryList) -> &'l Path {
        let root = self.root();
        volumes
            .iter()
            .filter(|v| !v.path.as_os_str().is_empty() && root.starts_with(&v.path))
            .max_by_key(|v| v.path.components().count())
            .map(|v| v.path.as_path())
            .unwrap_or(Path::new(""))
    }

    fn commit(&mut self, entries: EntryList, viewport: Viewport) {
        self.entries = entries;
        self.viewport = viewport;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.viewport = self.viewport.recompute(self.entries.len(), self.capacity);
    }

    fn page_len(&self) -> usize {
        self.capacity.saturating_sub(1).max(1)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use tempfile::TempDir;
    use twinpane_core::FsError;
    use twinpane_ops::{LocalFs, MemorySink, OperationExecutor};

    use super::*;

    fn fixture() -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in ["a", "b", "c"] {
            fs::create_dir(dir.path().join(name)).unwrap();
        }
        fs::create_dir(dir.path().join("b").join("inner")).unwrap();
        fs::write(dir.path().join("b").join("note.txt"), "x").unwrap();
        fs::write(dir.path().join("z.txt"), "hello").unwrap();
        dir
    }

    #[test]
    fn test_open_lists_with_parent_entry() {
        let dir = fixture();
        let fs = LocalFs::default();
        let sink = MemorySink::new();
        let exec = OperationExecutor::new(&fs, &sink);

        let pane = PaneState::open(&exec, dir.path(), 10);
        assert_eq!(pane.root(), dir.path());
        // .., a, b, c, z.txt
        assert_eq!(pane.entries().len(), 5);
        assert!(pane.is_parent_selected());
        assert!(pane.selected_item().is_none());
    }

    #[test]
    fn test_move_down_stops_at_end() {
        let dir = fixture();
        let fs = LocalFs::default();
        let sink = MemorySink::new();
        let exec = OperationExecutor::new(&fs, &sink);

        let mut pane = PaneState::open(&exec, dir.path(), 3);
        for _ in 0..10 {
            pane.move_down();
        }
        let vp = pane.viewport();
        assert_eq!(vp.selected, 4);
        assert_eq!((vp.first_visible, vp.last_visible), (2, 5));

        pane.jump_to_top();
        assert_eq!(pane.viewport(), Viewport { first_visible: 0, last_visible: 3, selected: 0 });
    }

    #[test]
    fn test_enter_and_return_restores_selection() {
        let dir = fixture();
        let fs = LocalFs::default();
        let sink = MemorySink::new();
        let exec = OperationExecutor::new(&fs, &sink);

        let mut pane = PaneState::open(&exec, dir.path(), 10);
        pane.move_down();
        pane.move_down();
        assert_eq!(pane.selected_entry().unwrap().name, "b");

        assert!(matches!(pane.activate(&exec), Activation::Opened));
        assert_eq!(pane.root(), dir.path().join("b"));
        assert_eq!(pane.viewport().selected, 0);
        assert_eq!(pane.depth(), 1);

        assert!(matches!(pane.activate(&exec), Activation::Opened));
        assert_eq!(pane.root(), dir.path());
        assert_eq!(pane.viewport().selected, 2);
        assert_eq!(pane.depth(), 0);
    }

    #[test]
    fn test_go_up_without_history_selects_previous_folder() {
        let dir = fixture();
        let fs = LocalFs::default();
        let sink = MemorySink::new();
        let exec = OperationExecutor::new(&fs, &sink);

        let mut pane = PaneState::open(&exec, &dir.path().join("c"), 10);
        assert!(matches!(pane.go_up(&exec), Activation::Opened));
        assert_eq!(pane.selected_entry().unwrap().name, "c");
    }

    #[test]
    fn test_failed_listing_keeps_pane() {
        let dir = fixture();
        let fs = LocalFs::default();
        let sink = MemorySink::new();
        let launcher = |path: &Path| -> Result<(), FsError> { Err(FsError::not_found(path)) };
        let exec = OperationExecutor::new(&fs, &sink).with_launcher(&launcher);

        let mut pane = PaneState::open(&exec, dir.path(), 10);
        pane.jump_to_bottom();
        let before = pane.viewport();

        assert!(matches!(pane.activate(&exec), Activation::Failed(_)));
        assert_eq!(pane.root(), dir.path());
        assert_eq!(pane.viewport(), before);
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_refresh_step_back_after_delete() {
        let dir = fixture();
        let fs = LocalFs::default();
        let sink = MemorySink::new();
        let exec = OperationExecutor::new(&fs, &sink);

        let mut pane = PaneState::open(&exec, dir.path(), 10);
        pane.jump_to_bottom();
        assert_eq!(pane.selected_entry().unwrap().name, "z.txt");

        fs::remove_file(dir.path().join("z.txt")).unwrap();
        pane.refresh(&exec, RefreshMode::StepBack).unwrap();
        assert_eq!(pane.entries().len(), 4);
        assert_eq!(pane.selected_entry().unwrap().name, "c");
    }

    #[test]
    fn test_refresh_of_vanished_root_shows_volumes() {
        let dir = fixture();
        let fs = LocalFs::default();
        let sink = MemorySink::new();
        let exec = OperationExecutor::new(&fs, &sink);

        let gone = dir.path().join("a");
        let mut pane = PaneState::open(&exec, &gone, 10);
        fs::remove_dir(&gone).unwrap();

        pane.refresh(&exec, RefreshMode::Keep).unwrap();
        assert!(pane.entries().is_volume_view());
        assert_eq!(pane.depth(), 0);
    }

    #[test]
    fn test_set_capacity_shrinks_window() {
        let dir = fixture();
        let fs = LocalFs::default();
        let sink = MemorySink::new();
        let exec = OperationExecutor::new(&fs, &sink);

        let mut pane = PaneState::open(&exec, dir.path(), 10);
        pane.jump_to_bottom();
        pane.set_capacity(2);

        let vp = pane.viewport();
        assert_eq!(vp.visible_len(), 2);
        assert!(vp.visible_range().contains(&vp.selected));
    }
}
