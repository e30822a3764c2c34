//! Recycle bin shell operations.
//!
//! [`RecycleBin`] is the seam between the presentation logic and the OS.
//! The Windows implementation is a thin wrapper over `shell32`; tests and
//! alternative schedulers plug in their own.

mod bin_status;
mod empty_result;
#[cfg(target_os = "windows")]
mod windows;

pub use {
    bin_status::BinStatus,
    empty_result::{EMPTY_NOTHING_TO_DELETE, EMPTY_OK, EmptyResult},
};

#[cfg(target_os = "windows")]
pub use windows::WindowsShell;

use crate::CoreResult;

/// Request/response access to the recycle bin. Holds no state.
pub trait RecycleBin: Send + Sync {
    /// Item count and total size across all drives.
    ///
    /// Any non-success status maps to `TrayError::QueryFailed` with the raw code.
    fn query_status(&self) -> CoreResult<BinStatus>;

    /// Empty the bin without a confirmation dialog.
    ///
    /// The shell's result code is returned untouched; callers classify it
    /// with [`EmptyResult::is_success`].
    fn empty(&self) -> CoreResult<EmptyResult>;

    /// Open the recycle bin in Explorer.
    fn open_folder(&self) -> CoreResult<()>;
}
