use crate::{
    CoreResult, TrayError,
    autostart::{Shortcut, ShortcutWriter},
};

use std::{os::windows::process::CommandExt, panic::Location, path::Path, process::Command};

use error_location::ErrorLocation;
use tracing::debug;

/// Keeps PowerShell from flashing a console window.
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Writes `.lnk` files through the `WScript.Shell` COM object.
#[derive(Debug, Default, Clone, Copy)]
pub struct PowerShellShortcutWriter;

impl PowerShellShortcutWriter {
    /// Create a new writer.
    pub fn new() -> Self {
        Self
    }

    #[track_caller]
    fn quoted(path: &Path) -> CoreResult<String> {
        let text = path.to_str().ok_or_else(|| TrayError::AutostartError {
            reason: format!("Path is not valid UTF-8: {:?}", path),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(format!("'{}'", text.replace('\'', "''")))
    }
}

impl ShortcutWriter for PowerShellShortcutWriter {
    #[track_caller]
    fn create(&self, shortcut: &Shortcut) -> CoreResult<()> {
        let script = format!(
            "$WshShell = New-Object -ComObject WScript.Shell; \
             $Shortcut = $WshShell.CreateShortcut({}); \
             $Shortcut.TargetPath = {}; \
             $Shortcut.WorkingDirectory = {}; \
             $Shortcut.Description = '{}'; \
             $Shortcut.Save()",
            Self::quoted(&shortcut.path)?,
            Self::quoted(&shortcut.target)?,
            Self::quoted(&shortcut.working_dir)?,
            shortcut.description.replace('\'', "''"),
        );

        let output = Command::new("powershell")
            .args(["-NoProfile", "-NonInteractive", "-Command", &script])
            .creation_flags(CREATE_NO_WINDOW)
            .output()
            .map_err(|e| TrayError::AutostartError {
                reason: format!("Failed to run PowerShell: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        if !output.status.success() {
            return Err(TrayError::AutostartError {
                reason: format!(
                    "Failed to create shortcut: {}",
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        debug!(shortcut = ?shortcut.path, "Shortcut written");

        Ok(())
    }
}
