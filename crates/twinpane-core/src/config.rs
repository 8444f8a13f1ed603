//! Browser configuration types.

use std::path::PathBuf;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Default file name of the persistent error record.
pub const DEFAULT_ERROR_LOG: &str = "errorlog.txt";

/// Configuration shared by the browser front ends.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct BrowserConfig {
    /// Directory opened in the left pane (empty = volume list).
    #[builder(default)]
    #[serde(default)]
    pub left_root: PathBuf,

    /// Directory opened in the right pane (empty = volume list).
    #[builder(default)]
    #[serde(default)]
    pub right_root: PathBuf,

    /// File that receives timestamped error lines.
    #[builder(default = "PathBuf::from(DEFAULT_ERROR_LOG)")]
    #[serde(default = "default_error_log")]
    pub error_log: PathBuf,

    /// Include hidden files (starting with .) in listings.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub include_hidden: bool,
}

fn default_true() -> bool {
    true
}

fn default_error_log() -> PathBuf {
    PathBuf::from(DEFAULT_ERROR_LOG)
}

impl BrowserConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref log) = self.error_log {
            if log.as_os_str().is_empty() {
                return Err("Error log path cannot be empty".to_string());
            }
        }
        Ok(())
    }
}

impl BrowserConfig {
    /// Create a new config builder.
    pub fn builder() -> BrowserConfigBuilder {
        BrowserConfigBuilder::default()
    }

    /// Check if a name should be hidden from listings.
    pub fn should_skip_hidden(&self, name: &str) -> bool {
        !self.include_hidden && name.starts_with('.')
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            left_root: PathBuf::new(),
            right_root: PathBuf::new(),
            error_log: default_error_log(),
            include_hidden: true,
        }
    }
}
