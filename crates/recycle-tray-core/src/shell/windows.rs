use crate::{
    CoreResult, TrayError,
    shell::{BinStatus, EmptyResult, RecycleBin},
};

use std::{mem, panic::Location, ptr};

use error_location::ErrorLocation;
use tracing::{debug, info, instrument};
use winapi::um::shellapi::{
    SHERB_NOCONFIRMATION, SHEmptyRecycleBinW, SHQUERYRBINFO, SHQueryRecycleBinW,
};

/// Shell namespace path of the recycle bin folder.
const RECYCLE_BIN_FOLDER: &str = "shell:RecycleBinFolder";

/// `shell32`-backed recycle bin access.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowsShell;

impl WindowsShell {
    /// Create a new shell adapter.
    pub fn new() -> Self {
        Self
    }
}

impl RecycleBin for WindowsShell {
    #[track_caller]
    fn query_status(&self) -> CoreResult<BinStatus> {
        // SAFETY: SHQUERYRBINFO is plain old data; zeroed is a valid value and
        // cbSize is set before the call as the API requires.
        let mut info: SHQUERYRBINFO = unsafe { mem::zeroed() };
        info.cbSize = mem::size_of::<SHQUERYRBINFO>() as u32;

        // SAFETY: a null root path (all drives) is a documented input and
        // `info` is a live, correctly sized struct for the whole call.
        let result = unsafe { SHQueryRecycleBinW(ptr::null(), &mut info) };

        if result != 0 {
            return Err(TrayError::QueryFailed {
                code: Some(result),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(BinStatus {
            item_count: u64::try_from(info.i64NumItems).unwrap_or(0),
            total_bytes: u64::try_from(info.i64Size).unwrap_or(0),
        })
    }

    #[instrument(skip(self))]
    fn empty(&self) -> CoreResult<EmptyResult> {
        // SAFETY: null window and null root path (all drives) are documented inputs.
        let code =
            unsafe { SHEmptyRecycleBinW(ptr::null_mut(), ptr::null(), SHERB_NOCONFIRMATION) };

        info!(code, "SHEmptyRecycleBinW returned");

        Ok(EmptyResult::new(code))
    }

    #[track_caller]
    #[instrument(skip(self))]
    fn open_folder(&self) -> CoreResult<()> {
        open::that(RECYCLE_BIN_FOLDER).map_err(|e| TrayError::OpenFailed {
            reason: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        debug!("Recycle bin folder opened");

        Ok(())
    }
}
