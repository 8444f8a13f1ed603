//! Conflict detection and resolution for copy operations.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A name clash found while copying.
#[derive(Debug, Clone)]
pub struct Conflict {
    /// The source path being copied.
    pub source: PathBuf,
    /// The destination path that already exists.
    pub destination: PathBuf,
    /// The kind of conflict.
    pub kind: ConflictKind,
}

impl Conflict {
    /// Create a new conflict.
    pub fn new(source: PathBuf, destination: PathBuf, kind: ConflictKind) -> Self {
        Self {
            source,
            destination,
            kind,
        }
    }

    /// Create a file exists conflict.
    pub fn file_exists(source: PathBuf, destination: PathBuf) -> Self {
        Self::new(source, destination, ConflictKind::FileExists)
    }

    /// Create a directory exists conflict.
    pub fn directory_exists(source: PathBuf, destination: PathBuf) -> Self {
        Self::new(source, destination, ConflictKind::DirectoryExists)
    }

    /// Lines for a question dialog: what clashes, where, and the question.
    pub fn prompt_lines(&self) -> Vec<String> {
        let noun = match self.kind {
            ConflictKind::FileExists => "File",
            ConflictKind::DirectoryExists => "Folder",
        };
        let name = self
            .source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.display().to_string());
        let location = self
            .destination
            .parent()
            .map(|p| p.display().to_string())
            .unwrap_or_default();

        vec![
            format!("{noun} {name}"),
            format!("in {location}"),
            "already exists. Replace?".to_string(),
        ]
    }
}

/// The kind of conflict encountered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConflictKind {
    /// A file already exists at the destination.
    FileExists,
    /// A directory already exists at the destination.
    DirectoryExists,
}

impl std::fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FileExists => write!(f, "File already exists"),
            Self::DirectoryExists => write!(f, "Directory already exists"),
        }
    }
}

/// How to resolve a conflict.
///
/// Every outcome applies to the conflicting item only. Cancel leaves the
/// item alone exactly like Skip; siblings and parents keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ConflictOutcome {
    /// Leave the existing item untouched.
    #[default]
    Skip,
    /// Remove the existing item and copy over it.
    Replace,
    /// Dismissed without choosing.
    Cancel,
}

impl ConflictOutcome {
    /// Whether the existing item should be replaced.
    pub fn is_replace(&self) -> bool {
        matches!(self, Self::Replace)
    }
}

/// Decides conflicts as they are found. Called synchronously mid-copy.
pub trait ConflictResolver {
    /// Decide what to do with one conflict.
    fn resolve(&self, conflict: &Conflict) -> ConflictOutcome;
}

impl<F> ConflictResolver for F
where
    F: Fn(&Conflict) -> ConflictOutcome,
{
    fn resolve(&self, conflict: &Conflict) -> ConflictOutcome {
        self(conflict)
    }
}

/// Answers every conflict the same way.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedResolver(pub ConflictOutcome);

impl ConflictResolver for FixedResolver {
    fn resolve(&self, _conflict: &Conflict) -> ConflictOutcome {
        self.0
    }
}

/// Replays a fixed sequence of answers and records every conflict it sees.
///
/// Once the script runs out, the fallback answer is used.
#[derive(Debug, Default)]
pub struct ScriptedResolver {
    answers: RefCell<VecDeque<ConflictOutcome>>,
    fallback: ConflictOutcome,
    seen: RefCell<Vec<Conflict>>,
}

impl ScriptedResolver {
    /// Create a resolver answering with `answers` in order, then `fallback`.
    pub fn new(answers: impl IntoIterator<Item = ConflictOutcome>, fallback: ConflictOutcome) -> Self {
        Self {
            answers: RefCell::new(answers.into_iter().collect()),
            fallback,
            seen: RefCell::new(Vec::new()),
        }
    }

    /// Conflicts presented so far, in order.
    pub fn seen(&self) -> Vec<Conflict> {
        self.seen.borrow().clone()
    }
}

impl ConflictResolver for ScriptedResolver {
    fn resolve(&self, conflict: &Conflict) -> ConflictOutcome {
        self.seen.borrow_mut().push(conflict.clone());
        self.answers.borrow_mut().pop_front().unwrap_or(self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_lines() {
        let conflict = Conflict::file_exists(
            PathBuf::from("/src/report.txt"),
            PathBuf::from("/dst/report.txt"),
        );
        let lines = conflict.prompt_lines();
        assert_eq!(lines[0], "File report.txt");
        assert_eq!(lines[1], "in /dst");
    }

    #[test]
    fn test_closure_resolver() {
        let resolver = |c: &Conflict| {
            if c.kind == ConflictKind::DirectoryExists {
                ConflictOutcome::Replace
            } else {
                ConflictOutcome::Skip
            }
        };
        let dir = Conflict::directory_exists(PathBuf::from("/a"), PathBuf::from("/b/a"));
        assert_eq!(resolver.resolve(&dir), ConflictOutcome::Replace);
    }

    #[test]
    fn test_scripted_resolver_falls_back() {
        let resolver = ScriptedResolver::new([ConflictOutcome::Replace], ConflictOutcome::Cancel);
        let c = Conflict::file_exists(PathBuf::from("/a/x"), PathBuf::from("/b/x"));
        assert_eq!(resolver.resolve(&c), ConflictOutcome::Replace);
        assert_eq!(resolver.resolve(&c), ConflictOutcome::Cancel);
        assert_eq!(resolver.seen().len(), 2);
    }
}
