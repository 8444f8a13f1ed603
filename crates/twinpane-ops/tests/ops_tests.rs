use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use twinpane_core::{EntryKind, FileInfo, FsError, Volume};
use twinpane_ops::{
    ConflictKind, ConflictOutcome, ErrorLog, FailureKind, FileSystem, FixedResolver, FolderStats,
    ListOutcome, LocalFs, MemorySink, Notice, OperationExecutor, RecordingNotifier,
    ScriptedResolver,
};

/// Local filesystem that records every removal, in order.
#[derive(Default)]
struct RecordingFs {
    inner: LocalFs,
    removed: RefCell<Vec<PathBuf>>,
}

impl RecordingFs {
    fn removed(&self) -> Vec<PathBuf> {
        self.removed.borrow().clone()
    }
}

impl FileSystem for RecordingFs {
    fn is_dir(&self, path: &Path) -> bool {
        self.inner.is_dir(path)
    }
    fn is_file(&self, path: &Path) -> bool {
        self.inner.is_file(path)
    }
    fn is_symlink(&self, path: &Path) -> bool {
        self.inner.is_symlink(path)
    }
    fn list_dirs(&self, path: &Path) -> Result<Vec<PathBuf>, FsError> {
        self.inner.list_dirs(path)
    }
    fn list_files(&self, path: &Path) -> Result<Vec<PathBuf>, FsError> {
        self.inner.list_files(path)
    }
    fn create_dir(&self, path: &Path) -> Result<(), FsError> {
        self.inner.create_dir(path)
    }
    fn delete_dir(&self, path: &Path) -> Result<(), FsError> {
        self.removed.borrow_mut().push(path.to_path_buf());
        self.inner.delete_dir(path)
    }
    fn delete_file(&self, path: &Path) -> Result<(), FsError> {
        self.removed.borrow_mut().push(path.to_path_buf());
        self.inner.delete_file(path)
    }
    fn copy_file(&self, source: &Path, dest: &Path) -> Result<u64, FsError> {
        self.inner.copy_file(source, dest)
    }
    fn file_info(&self, path: &Path) -> Result<FileInfo, FsError> {
        self.inner.file_info(path)
    }
    fn volumes(&self) -> Result<Vec<Volume>, FsError> {
        Ok(vec![Volume::new("/", "/", None)])
    }
    fn canonicalize(&self, path: &Path) -> Result<PathBuf, FsError> {
        self.inner.canonicalize(path)
    }
}

/// Local filesystem where copying or removing one path always fails.
struct FailingFs {
    inner: LocalFs,
    broken: PathBuf,
}

impl FailingFs {
    fn new(broken: impl Into<PathBuf>) -> Self {
        Self {
            inner: LocalFs::default(),
            broken: broken.into(),
        }
    }

    fn check(&self, path: &Path) -> Result<(), FsError> {
        if path == self.broken {
            Err(FsError::io(
                path,
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "locked"),
            ))
        } else {
            Ok(())
        }
    }
}

impl FileSystem for FailingFs {
    fn is_dir(&self, path: &Path) -> bool {
        self.inner.is_dir(path)
    }
    fn is_file(&self, path: &Path) -> bool {
        self.inner.is_file(path)
    }
    fn is_symlink(&self, path: &Path) -> bool {
        self.inner.is_symlink(path)
    }
    fn list_dirs(&self, path: &Path) -> Result<Vec<PathBuf>, FsError> {
        self.inner.list_dirs(path)
    }
    fn list_files(&self, path: &Path) -> Result<Vec<PathBuf>, FsError> {
        self.inner.list_files(path)
    }
    fn create_dir(&self, path: &Path) -> Result<(), FsError> {
        self.inner.create_dir(path)
    }
    fn delete_dir(&self, path: &Path) -> Result<(), FsError> {
        self.check(path)?;
        self.inner.delete_dir(path)
    }
    fn delete_file(&self, path: &Path) -> Result<(), FsError> {
        self.check(path)?;
        self.inner.delete_file(path)
    }
    fn copy_file(&self, source: &Path, dest: &Path) -> Result<u64, FsError> {
        self.check(source)?;
        self.inner.copy_file(source, dest)
    }
    fn file_info(&self, path: &Path) -> Result<FileInfo, FsError> {
        self.inner.file_info(path)
    }
    fn volumes(&self) -> Result<Vec<Volume>, FsError> {
        self.inner.volumes()
    }
    fn canonicalize(&self, path: &Path) -> Result<PathBuf, FsError> {
        self.inner.canonicalize(path)
    }
}

/// Write a file, creating parent folders.
fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Sorted relative paths of every item below `root`.
fn tree(root: &Path) -> Vec<String> {
    fn walk(root: &Path, dir: &Path, out: &mut Vec<String>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            out.push(
                path.strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/"),
            );
            if path.is_dir() {
                walk(root, &path, out);
            }
        }
    }
    let mut out = Vec::new();
    walk(root, root, &mut out);
    out.sort();
    out
}

#[test]
fn test_copy_into_same_folder_is_noop() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("a.txt");
    write(&file, "data");

    let fs_ = LocalFs::default();
    let sink = MemorySink::new();
    let exec = OperationExecutor::new(&fs_, &sink);
    let resolver = ScriptedResolver::new([], ConflictOutcome::Replace);

    let result = exec.copy(&file, temp.path(), false, &resolver);
    assert_eq!(result.succeeded, 0);
    assert!(result.is_success());
    assert!(resolver.seen().is_empty());

    let result = exec.copy(temp.path(), temp.path(), false, &resolver);
    assert_eq!(result.succeeded, 0);
    assert_eq!(tree(temp.path()), vec!["a.txt"]);
    assert!(sink.is_empty());
}

#[test]
fn test_copy_blank_paths_is_noop() {
    let temp = TempDir::new().unwrap();
    let fs_ = LocalFs::default();
    let sink = MemorySink::new();
    let exec = OperationExecutor::new(&fs_, &sink);

    let result = exec.copy(Path::new(""), temp.path(), false, &FixedResolver::default());
    assert_eq!(result.succeeded + result.failed, 0);
    let result = exec.copy(temp.path(), Path::new("  "), false, &FixedResolver::default());
    assert_eq!(result.succeeded + result.failed, 0);
}

#[test]
fn test_copy_file_into_folder() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src/report.txt");
    let dst = temp.path().join("dst");
    write(&src, "hello");
    fs::create_dir(&dst).unwrap();

    let fs_ = LocalFs::default();
    let sink = MemorySink::new();
    let notifier = RecordingNotifier::new();
    let exec = OperationExecutor::new(&fs_, &sink).with_notifier(&notifier);

    let result = exec.copy(&src, &dst, false, &FixedResolver::default());
    assert_eq!(result.succeeded, 1);
    assert_eq!(result.summary(), "Copied 1 items");
    assert_eq!(fs::read_to_string(dst.join("report.txt")).unwrap(), "hello");
    assert!(matches!(
        notifier.notices().as_slice(),
        [Notice::Copying { .. }]
    ));
}

#[test]
fn test_copy_conflict_skip_preserves_bytes() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src/x.txt");
    let dst = temp.path().join("dst");
    write(&src, "new");
    write(&dst.join("x.txt"), "old");

    let fs_ = LocalFs::default();
    let sink = MemorySink::new();
    let exec = OperationExecutor::new(&fs_, &sink);
    let resolver = ScriptedResolver::new([ConflictOutcome::Skip], ConflictOutcome::Replace);

    let result = exec.copy(&src, &dst, false, &resolver);
    assert_eq!(result.skipped, 1);
    assert_eq!(result.succeeded, 0);
    assert_eq!(fs::read_to_string(dst.join("x.txt")).unwrap(), "old");

    let seen = resolver.seen();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].kind, ConflictKind::FileExists);
    assert_eq!(seen[0].destination, dst.join("x.txt"));
}

#[test]
fn test_copy_conflict_cancel_leaves_item() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src/x.txt");
    let dst = temp.path().join("dst");
    write(&src, "new");
    write(&dst.join("x.txt"), "old");

    let fs_ = LocalFs::default();
    let sink = MemorySink::new();
    let exec = OperationExecutor::new(&fs_, &sink);

    let result = exec.copy(&src, &dst, false, &FixedResolver(ConflictOutcome::Cancel));
    assert_eq!(result.skipped, 1);
    assert!(result.is_success());
    assert_eq!(fs::read_to_string(dst.join("x.txt")).unwrap(), "old");
}

#[test]
fn test_copy_conflict_replace_file() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src/x.txt");
    let dst = temp.path().join("dst");
    write(&src, "new");
    write(&dst.join("x.txt"), "old");

    let fs_ = LocalFs::default();
    let sink = MemorySink::new();
    let exec = OperationExecutor::new(&fs_, &sink);

    let result = exec.copy(&src, &dst, false, &FixedResolver(ConflictOutcome::Replace));
    assert_eq!(result.succeeded, 1);
    assert_eq!(fs::read_to_string(dst.join("x.txt")).unwrap(), "new");
}

#[test]
fn test_copy_directory_tree() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("S");
    write(&src.join("top.txt"), "t");
    write(&src.join("sub/deep.txt"), "d");
    fs::create_dir(src.join("empty")).unwrap();
    let dst = temp.path().join("D");
    fs::create_dir(&dst).unwrap();

    let fs_ = LocalFs::default();
    let sink = MemorySink::new();
    let exec = OperationExecutor::new(&fs_, &sink);

    let result = exec.copy(&src, &dst, false, &FixedResolver::default());
    assert!(result.is_success());
    // S, S/empty, S/sub, S/sub/deep.txt, S/top.txt
    assert_eq!(result.succeeded, 5);
    assert_eq!(
        tree(&dst),
        vec!["S", "S/empty", "S/sub", "S/sub/deep.txt", "S/top.txt"]
    );
    assert_eq!(fs::read_to_string(dst.join("S/sub/deep.txt")).unwrap(), "d");
}

#[test]
fn test_copy_directory_skip_leaves_subtree() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("S");
    write(&src.join("x"), "new");
    write(&src.join("y"), "new");
    let dst = temp.path().join("D");
    write(&dst.join("S/x"), "old");

    let fs_ = LocalFs::default();
    let sink = MemorySink::new();
    let exec = OperationExecutor::new(&fs_, &sink);
    let resolver = ScriptedResolver::new([], ConflictOutcome::Skip);

    let result = exec.copy(&src, &dst, false, &resolver);
    assert_eq!(result.skipped, 1);
    assert_eq!(tree(&dst), vec!["S", "S/x"]);
    assert_eq!(fs::read_to_string(dst.join("S/x")).unwrap(), "old");
    assert_eq!(resolver.seen()[0].kind, ConflictKind::DirectoryExists);
}

#[test]
fn test_copy_directory_replace_leaves_exactly_new_contents() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("S");
    write(&src.join("x"), "new-x");
    write(&src.join("y"), "new-y");
    let dst = temp.path().join("D");
    write(&dst.join("S/x"), "old-x");
    write(&dst.join("S/old"), "stale");
    write(&dst.join("S/nested/z"), "stale");

    let fs_ = LocalFs::default();
    let sink = MemorySink::new();
    let exec = OperationExecutor::new(&fs_, &sink);
    let resolver = ScriptedResolver::new([ConflictOutcome::Replace], ConflictOutcome::Skip);

    let result = exec.copy(&src, &dst, false, &resolver);
    assert!(result.is_success(), "{:?}", result.errors);
    assert_eq!(tree(&dst), vec!["S", "S/x", "S/y"]);
    assert_eq!(fs::read_to_string(dst.join("S/x")).unwrap(), "new-x");
    // Only the top-level clash is asked about.
    assert_eq!(resolver.seen().len(), 1);
}

#[test]
fn test_force_replace_never_asks() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("S");
    write(&src.join("x"), "new");
    let dst = temp.path().join("D");
    write(&dst.join("S/x"), "old");

    let fs_ = LocalFs::default();
    let sink = MemorySink::new();
    let exec = OperationExecutor::new(&fs_, &sink);
    let resolver = ScriptedResolver::new([], ConflictOutcome::Skip);

    let result = exec.copy(&src, &dst, true, &resolver);
    assert!(result.is_success());
    assert!(resolver.seen().is_empty());
    assert_eq!(fs::read_to_string(dst.join("S/x")).unwrap(), "new");
}

#[test]
fn test_copy_folder_into_its_own_subfolder_fails() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("S");
    write(&src.join("inner/file"), "f");

    let fs_ = LocalFs::default();
    let sink = MemorySink::new();
    let exec = OperationExecutor::new(&fs_, &sink);

    let result = exec.copy(&src, &src.join("inner"), false, &FixedResolver::default());
    assert_eq!(result.failed, 1);
    assert_eq!(tree(&src), vec!["inner", "inner/file"]);
    assert_eq!(sink.len(), 1);
}

#[cfg(unix)]
#[test]
fn test_copy_file_onto_itself_through_link_is_noop() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("D");
    write(&dir.join("f"), "data");
    let link = temp.path().join("link");
    std::os::unix::fs::symlink(&dir, &link).unwrap();

    let fs_ = LocalFs::default();
    let sink = MemorySink::new();
    let exec = OperationExecutor::new(&fs_, &sink);
    let resolver = ScriptedResolver::new([], ConflictOutcome::Replace);

    let result = exec.copy(&dir.join("f"), &link, false, &resolver);
    assert_eq!(result.succeeded + result.failed + result.skipped, 0);
    assert!(resolver.seen().is_empty());
    assert_eq!(fs::read_to_string(dir.join("f")).unwrap(), "data");
    assert!(sink.is_empty());
}

#[cfg(unix)]
#[test]
fn test_copy_folder_into_itself_through_link() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("S");
    write(&src.join("inner/file"), "f");
    let to_self = temp.path().join("to_self");
    let to_inner = temp.path().join("to_inner");
    std::os::unix::fs::symlink(&src, &to_self).unwrap();
    std::os::unix::fs::symlink(src.join("inner"), &to_inner).unwrap();

    let fs_ = LocalFs::default();
    let sink = MemorySink::new();
    let exec = OperationExecutor::new(&fs_, &sink);

    // Same folder under another name: nothing to do.
    let result = exec.copy(&src, &to_self, false, &FixedResolver(ConflictOutcome::Replace));
    assert_eq!(result.succeeded + result.failed + result.skipped, 0);

    let result = exec.copy(&src, &to_inner, false, &FixedResolver(ConflictOutcome::Replace));
    assert_eq!(result.failed, 1);
    assert_eq!(result.succeeded, 0);
    assert_eq!(result.errors[0].kind, FailureKind::Transfer);

    assert_eq!(tree(&src), vec!["inner", "inner/file"]);
    assert_eq!(sink.len(), 1);
}

#[test]
fn test_copy_failure_does_not_stop_siblings() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("S");
    write(&src.join("a"), "a");
    write(&src.join("b"), "b");
    write(&src.join("c"), "c");
    let dst = temp.path().join("D");
    fs::create_dir(&dst).unwrap();

    let fs_ = FailingFs::new(src.join("b"));
    let sink = MemorySink::new();
    let exec = OperationExecutor::new(&fs_, &sink);

    let result = exec.copy(&src, &dst, false, &FixedResolver::default());
    // S itself, a and c.
    assert_eq!(result.succeeded, 3);
    assert_eq!(result.failed, 1);
    assert_eq!(tree(&dst), vec!["S", "S/a", "S/c"]);
    assert_eq!(sink.errors()[0].path, src.join("b"));
}

#[test]
fn test_copy_missing_source_is_reported_once() {
    let temp = TempDir::new().unwrap();
    let fs_ = LocalFs::default();
    let sink = MemorySink::new();
    let notifier = RecordingNotifier::new();
    let exec = OperationExecutor::new(&fs_, &sink).with_notifier(&notifier);

    let result = exec.copy(
        &temp.path().join("ghost"),
        temp.path(),
        false,
        &FixedResolver::default(),
    );
    assert_eq!(result.failed, 1);
    assert_eq!(sink.errors()[0].kind, FailureKind::Transfer);
    let failures = notifier
        .notices()
        .into_iter()
        .filter(|n| matches!(n, Notice::Failed(_)))
        .count();
    assert_eq!(failures, 1);
}

#[test]
fn test_copy_into_file_destination_fails() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("a");
    let not_dir = temp.path().join("b");
    write(&src, "a");
    write(&not_dir, "b");

    let fs_ = LocalFs::default();
    let sink = MemorySink::new();
    let exec = OperationExecutor::new(&fs_, &sink);

    let result = exec.copy(&src, &not_dir, false, &FixedResolver::default());
    assert_eq!(result.failed, 1);
    assert_eq!(fs::read_to_string(&not_dir).unwrap(), "b");
}

#[test]
fn test_delete_is_bottom_up() {
    let temp = TempDir::new().unwrap();
    let a = temp.path().join("A");
    write(&a.join("B/g"), "g");
    write(&a.join("f"), "f");

    let fs_ = RecordingFs::default();
    let sink = MemorySink::new();
    let exec = OperationExecutor::new(&fs_, &sink);

    let result = exec.delete(&a, true);
    assert!(result.is_success());
    assert_eq!(result.succeeded, 4);
    assert_eq!(
        fs_.removed(),
        vec![a.join("B/g"), a.join("B"), a.join("f"), a.clone()]
    );
    assert!(!a.exists());
}

#[test]
fn test_delete_silent_suppresses_notices() {
    let temp = TempDir::new().unwrap();
    let a = temp.path().join("A");
    write(&a.join("f"), "f");

    let fs_ = LocalFs::default();
    let sink = MemorySink::new();
    let notifier = RecordingNotifier::new();
    let exec = OperationExecutor::new(&fs_, &sink).with_notifier(&notifier);

    exec.delete(&a, true);
    assert!(notifier.notices().is_empty());

    write(&a.join("f"), "f");
    exec.delete(&a, false);
    let deleting: Vec<PathBuf> = notifier
        .notices()
        .into_iter()
        .filter_map(|n| match n {
            Notice::Deleting { path } => Some(path),
            _ => None,
        })
        .collect();
    assert_eq!(deleting, vec![a.join("f"), a.clone()]);
}

#[test]
fn test_delete_missing_and_blank() {
    let temp = TempDir::new().unwrap();
    let fs_ = LocalFs::default();
    let sink = MemorySink::new();
    let exec = OperationExecutor::new(&fs_, &sink);

    let result = exec.delete(Path::new(""), false);
    assert_eq!(result.succeeded + result.failed, 0);

    let result = exec.delete(&temp.path().join("ghost"), false);
    assert_eq!(result.failed, 1);
    assert_eq!(result.summary(), "Deleted 0 items, 1 failed");
}

#[test]
fn test_delete_failure_keeps_parent_but_removes_siblings() {
    let temp = TempDir::new().unwrap();
    let a = temp.path().join("A");
    write(&a.join("sub/x"), "x");
    write(&a.join("f1"), "1");
    write(&a.join("f2"), "2");

    let fs_ = FailingFs::new(a.join("sub/x"));
    let sink = MemorySink::new();
    let exec = OperationExecutor::new(&fs_, &sink);

    let result = exec.delete(&a, true);
    // x is locked, so sub and A stay behind.
    assert_eq!(result.failed, 3);
    assert_eq!(result.succeeded, 2);
    assert_eq!(tree(&a), vec!["sub", "sub/x"]);
    assert_eq!(sink.len(), 3);
}

#[test]
fn test_replace_after_partial_delete_merges_without_asking_again() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("S");
    write(&src.join("x"), "new");
    let dst = temp.path().join("D");
    write(&dst.join("S/keep"), "old");
    write(&dst.join("S/stale"), "old");
    write(&dst.join("S/x"), "old");

    let fs_ = FailingFs::new(dst.join("S/keep"));
    let sink = MemorySink::new();
    let exec = OperationExecutor::new(&fs_, &sink);
    let resolver = ScriptedResolver::new([ConflictOutcome::Replace], ConflictOutcome::Skip);

    let result = exec.copy(&src, &dst, false, &resolver);
    assert_eq!(resolver.seen().len(), 1);
    assert_eq!(fs::read_to_string(dst.join("S/x")).unwrap(), "new");
    assert_eq!(fs::read_to_string(dst.join("S/keep")).unwrap(), "old");
    assert!(!dst.join("S/stale").exists());
    // keep and the folder holding it.
    assert_eq!(result.failed, 2);
    assert_eq!(result.skipped, 0);
}

#[cfg(unix)]
#[test]
fn test_delete_removes_link_not_target() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("target");
    write(&target.join("keep.txt"), "keep");
    let a = temp.path().join("A");
    fs::create_dir(&a).unwrap();
    std::os::unix::fs::symlink(&target, a.join("link")).unwrap();

    let fs_ = LocalFs::default();
    let sink = MemorySink::new();
    let exec = OperationExecutor::new(&fs_, &sink);

    let result = exec.delete(&a, true);
    assert!(result.is_success(), "{:?}", result.errors);
    assert!(!a.exists());
    assert!(target.join("keep.txt").exists());
}

#[test]
fn test_stats_additivity() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(&root.join("A/f"), &"x".repeat(100));
    write(&root.join("A/B/g"), &"y".repeat(50));

    let fs_ = LocalFs::default();
    let sink = MemorySink::new();
    let exec = OperationExecutor::new(&fs_, &sink);

    assert_eq!(exec.stats(root), FolderStats::new(2, 2, 150));
    assert_eq!(exec.stats(&root.join("A")), FolderStats::new(1, 2, 150));
    assert_eq!(exec.stats(&root.join("A/f")), FolderStats::new(0, 0, 100));
    assert_eq!(exec.stats(Path::new("")), FolderStats::default());
    assert_eq!(exec.stats(&root.join("ghost")), FolderStats::default());
}

#[test]
fn test_list_directory() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(&root.join("b.txt"), "b");
    fs::create_dir(root.join("sub")).unwrap();

    let fs_ = LocalFs::default();
    let sink = MemorySink::new();
    let exec = OperationExecutor::new(&fs_, &sink);

    let ListOutcome::Listed(list) = exec.list(root) else {
        panic!("expected a listing");
    };
    assert_eq!(list.root(), root);
    let kinds: Vec<EntryKind> = list.iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![EntryKind::Folder, EntryKind::Folder, EntryKind::File]);
    assert_eq!(list.get(0).unwrap().name, "..");
    assert_eq!(list.get(1).unwrap().name, "sub");
}

#[test]
fn test_list_blank_or_missing_shows_volumes() {
    let temp = TempDir::new().unwrap();
    let fs_ = RecordingFs::default();
    let sink = MemorySink::new();
    let exec = OperationExecutor::new(&fs_, &sink);

    for path in [PathBuf::new(), PathBuf::from("   "), temp.path().join("ghost")] {
        let list = exec.list(&path).listed().unwrap();
        assert!(list.is_volume_view());
        assert_eq!(list.len(), 1);
        assert!(!list.is_parent_index(0));
    }
}

#[test]
fn test_list_file_launches() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("doc.pdf");
    write(&file, "%PDF");

    let opened = RefCell::new(Vec::new());
    let launcher = |path: &Path| -> Result<(), FsError> {
        opened.borrow_mut().push(path.to_path_buf());
        Ok(())
    };

    let fs_ = LocalFs::default();
    let sink = MemorySink::new();
    let exec = OperationExecutor::new(&fs_, &sink).with_launcher(&launcher);

    match exec.list(&file) {
        ListOutcome::Launched(path) => assert_eq!(path, file),
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(opened.borrow().as_slice(), [file.clone()]);
}

#[test]
fn test_list_launch_failure_is_logged() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("doc.bin");
    write(&file, "?");
    let log_path = temp.path().join("errorlog.txt");

    let launcher = |path: &Path| -> Result<(), FsError> {
        Err(FsError::Launch {
            path: path.to_path_buf(),
            source: std::io::Error::other("no handler"),
        })
    };

    let fs_ = LocalFs::default();
    let sink = ErrorLog::new(&log_path);
    let exec = OperationExecutor::new(&fs_, &sink).with_launcher(&launcher);

    let ListOutcome::Failed(error) = exec.list(&file) else {
        panic!("expected a failure");
    };
    assert_eq!(error.kind, FailureKind::Launch);

    let log = fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("Launch"));
    assert!(log.contains("no handler"));
}
