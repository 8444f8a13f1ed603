//! Progress notices raised by the engines.

use std::cell::RefCell;
use std::path::PathBuf;

use crate::OperationError;

/// Something the user should see while an operation runs.
#[derive(Debug, Clone)]
pub enum Notice {
    /// An item is about to be copied into `destination`.
    Copying { source: PathBuf, destination: PathBuf },
    /// An item is about to be deleted.
    Deleting { path: PathBuf },
    /// An item failed; the operation continues.
    Failed(OperationError),
}

impl Notice {
    /// Dialog title for the notice.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Copying { .. } => "Copying",
            Self::Deleting { .. } => "Deleting",
            Self::Failed(_) => "Error",
        }
    }

    /// Body lines for the notice.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Copying {
                source,
                destination,
            } => vec![
                source
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| source.display().to_string()),
                "to".to_string(),
                destination.display().to_string(),
            ],
            Self::Deleting { path } => vec![path.display().to_string()],
            Self::Failed(error) => vec![
                format!("{} failed", error.kind),
                error.path.display().to_string(),
                error.message.clone(),
            ],
        }
    }
}

/// Receives notices. Calls are blocking and made from inside the recursion.
pub trait Notifier {
    /// Show or record a notice.
    fn notify(&self, notice: &Notice);
}

/// Ignores every notice.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, _notice: &Notice) {}
}

/// Keeps every notice in memory.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: RefCell<Vec<Notice>>,
}

impl RecordingNotifier {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Notices received so far.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &Notice) {
        self.notices.borrow_mut().push(notice.clone());
    }
}
