//! Per-item failure records.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use strum::Display;
use thiserror::Error;
use twinpane_core::FsError;

/// What the engine was doing when an item failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum FailureKind {
    /// Listing a directory (or the volumes) failed.
    #[strum(serialize = "Enumeration")]
    Enumeration,
    /// Creating, copying or deleting an item failed.
    #[strum(serialize = "Transfer")]
    Transfer,
    /// Opening a file with its associated program failed.
    #[strum(serialize = "Launch")]
    Launch,
}

/// An error that occurred while processing a single item.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[error("{}: {message}", path.display())]
pub struct OperationError {
    /// The path that caused the error.
    pub path: PathBuf,
    /// A human-readable error message.
    pub message: String,
    /// Phase the failure belongs to.
    pub kind: FailureKind,
}

impl OperationError {
    /// Create a new operation error.
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>, kind: FailureKind) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            kind,
        }
    }

    /// Build a record from a filesystem error, keeping its path.
    pub fn from_fs(err: &FsError, kind: FailureKind) -> Self {
        Self::new(err.path(), err.to_string(), kind)
    }

    /// Enumeration failure.
    pub fn enumeration(err: &FsError) -> Self {
        Self::from_fs(err, FailureKind::Enumeration)
    }

    /// Transfer failure.
    pub fn transfer(err: &FsError) -> Self {
        Self::from_fs(err, FailureKind::Transfer)
    }
}
