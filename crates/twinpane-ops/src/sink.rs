//! Persistent and in-memory error records.

use std::cell::RefCell;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::OperationError;

/// Receives every per-item failure.
pub trait ErrorSink {
    /// Record one failure. Must not fail.
    fn log(&self, error: &OperationError);
}

/// Appends timestamped lines to a file.
///
/// Write failures are swallowed: the log is best effort and never interrupts
/// an operation.
#[derive(Debug, Clone)]
pub struct ErrorLog {
    path: PathBuf,
}

impl ErrorLog {
    /// Create a log writing to `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Format one log line (without the trailing newline).
    pub fn format_line(error: &OperationError) -> String {
        format!(
            "{} - {}: {}: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            error.kind,
            error.path.display(),
            error.message
        )
    }
}

impl ErrorSink for ErrorLog {
    fn log(&self, error: &OperationError) {
        let line = Self::format_line(error);
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| writeln!(file, "{line}"));

        if let Err(e) = result {
            tracing::debug!("could not write error log {}: {}", self.path.display(), e);
        }
    }
}

/// Collects failures in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    errors: RefCell<Vec<OperationError>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Failures recorded so far.
    pub fn errors(&self) -> Vec<OperationError> {
        self.errors.borrow().clone()
    }

    /// Number of failures recorded.
    pub fn len(&self) -> usize {
        self.errors.borrow().len()
    }

    /// Check if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.errors.borrow().is_empty()
    }
}

impl ErrorSink for MemorySink {
    fn log(&self, error: &OperationError) {
        self.errors.borrow_mut().push(error.clone());
    }
}
