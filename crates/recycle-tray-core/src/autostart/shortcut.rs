use crate::CoreResult;

use std::path::PathBuf;

/// A `.lnk` file to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    /// Where the `.lnk` file goes.
    pub path: PathBuf,
    /// Executable the shortcut launches.
    pub target: PathBuf,
    /// Working directory for the launched process.
    pub working_dir: PathBuf,
    /// Comment shown in the shortcut's properties.
    pub description: String,
}

/// Creates shortcut files.
pub trait ShortcutWriter: Send + Sync {
    /// Write `shortcut` to disk, replacing any existing file.
    fn create(&self, shortcut: &Shortcut) -> CoreResult<()>;
}
