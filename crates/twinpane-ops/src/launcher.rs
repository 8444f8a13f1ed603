//! Opening files with their associated application.

use std::path::Path;

use twinpane_core::FsError;

/// Opens a file outside the browser.
pub trait Launcher {
    /// Open `path` with its default application.
    fn open(&self, path: &Path) -> Result<(), FsError>;
}

/// Uses the platform's default opener.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn open(&self, path: &Path) -> Result<(), FsError> {
        open::that_detached(path).map_err(|source| FsError::Launch {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl<F> Launcher for F
where
    F: Fn(&Path) -> Result<(), FsError>,
{
    fn open(&self, path: &Path) -> Result<(), FsError> {
        self(path)
    }
}
