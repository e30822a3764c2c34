use crate::{CoreResult, TrayError, desktop_icon::DesktopIconFlag};

use std::{io::ErrorKind, panic::Location, ptr};

use error_location::ErrorLocation;
use tracing::debug;
use winapi::um::shlobj::SHChangeNotify;
use winreg::{RegKey, enums::HKEY_CURRENT_USER};

const HIDE_DESKTOP_ICONS_KEY: &str =
    r"Software\Microsoft\Windows\CurrentVersion\Explorer\HideDesktopIcons\NewStartPanel";

/// CLSID of the recycle bin shell folder.
const RECYCLE_BIN_CLSID: &str = "{645FF040-5081-101B-9F08-00AA002F954E}";

const SHCNE_ASSOCCHANGED: i32 = 0x0800_0000;
const SHCNF_FLUSH: u32 = 0x1000;

/// Desktop icon flag stored as a DWORD under `HKCU`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RegistryDesktopIconFlag;

impl RegistryDesktopIconFlag {
    /// Create a new registry-backed flag.
    pub fn new() -> Self {
        Self
    }
}

impl DesktopIconFlag for RegistryDesktopIconFlag {
    #[track_caller]
    fn read(&self) -> CoreResult<Option<u32>> {
        let hkcu = RegKey::predef(HKEY_CURRENT_USER);

        let key = match hkcu.open_subkey(HIDE_DESKTOP_ICONS_KEY) {
            Ok(key) => key,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(TrayError::RegistryError {
                    reason: format!("Failed to open key: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        match key.get_value::<u32, _>(RECYCLE_BIN_CLSID) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(TrayError::RegistryError {
                reason: format!("Failed to read value: {}", e),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    #[track_caller]
    fn write(&self, value: u32) -> CoreResult<()> {
        let hkcu = RegKey::predef(HKEY_CURRENT_USER);

        let (key, _) =
            hkcu.create_subkey(HIDE_DESKTOP_ICONS_KEY)
                .map_err(|e| TrayError::RegistryError {
                    reason: format!("Failed to open key for writing: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?;

        key.set_value(RECYCLE_BIN_CLSID, &value)
            .map_err(|e| TrayError::RegistryError {
                reason: format!("Failed to write value: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        debug!(value, "Desktop icon flag written");

        Ok(())
    }

    fn notify_shell(&self) {
        // SAFETY: SHCNE_ASSOCCHANGED takes no item pointers.
        unsafe { SHChangeNotify(SHCNE_ASSOCCHANGED, SHCNF_FLUSH, ptr::null(), ptr::null()) };
    }
}
