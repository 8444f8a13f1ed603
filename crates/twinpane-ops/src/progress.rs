//! Result summaries for completed operations.

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::OperationError;

/// The type of operation being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum OperationType {
    Copy,
    Delete,
}

/// Result of a completed operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationComplete {
    /// The type of operation.
    pub operation_type: OperationType,
    /// Number of items successfully processed.
    pub succeeded: usize,
    /// Number of items that failed.
    pub failed: usize,
    /// Number of items left untouched by a Skip or Cancel decision.
    pub skipped: usize,
    /// Errors that occurred.
    pub errors: Vec<OperationError>,
}

impl OperationComplete {
    /// Create an empty result.
    pub fn new(operation_type: OperationType) -> Self {
        Self {
            operation_type,
            succeeded: 0,
            failed: 0,
            skipped: 0,
            errors: Vec::new(),
        }
    }

    /// Check if the operation was fully successful.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Count one processed item.
    pub(crate) fn record_success(&mut self) {
        self.succeeded += 1;
    }

    /// Count one skipped item.
    pub(crate) fn record_skip(&mut self) {
        self.skipped += 1;
    }

    /// Count one failed item and keep its error.
    pub(crate) fn record_failure(&mut self, error: OperationError) {
        self.failed += 1;
        self.errors.push(error);
    }

    /// Get a human-readable summary of the operation.
    pub fn summary(&self) -> String {
        let action = match self.operation_type {
            OperationType::Copy => "Copied",
            OperationType::Delete => "Deleted",
        };

        let mut summary = format!("{} {} items", action, self.succeeded);
        if self.skipped > 0 {
            summary.push_str(&format!(", {} skipped", self.skipped));
        }
        if self.failed > 0 {
            summary.push_str(&format!(", {} failed", self.failed));
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FailureKind;

    #[test]
    fn test_summary() {
        let mut complete = OperationComplete::new(OperationType::Copy);
        complete.record_success();
        complete.record_success();
        assert_eq!(complete.summary(), "Copied 2 items");

        complete.record_skip();
        complete.record_failure(OperationError::new("/x", "boom", FailureKind::Transfer));
        assert_eq!(complete.summary(), "Copied 2 items, 1 skipped, 1 failed");
        assert!(!complete.is_success());
    }

    #[test]
    fn test_delete_summary() {
        let complete = OperationComplete::new(OperationType::Delete);
        assert_eq!(complete.summary(), "Deleted 0 items");
        assert!(complete.is_success());
    }
}
