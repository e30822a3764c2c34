use crate::{
    CoreResult, TrayError,
    autostart::{Shortcut, ShortcutWriter},
};

use std::{
    fs,
    panic::Location,
    path::{Path, PathBuf},
};

use directories::BaseDirs;
use error_location::ErrorLocation;
use tracing::{error, info, instrument, warn};

const SHORTCUT_DESCRIPTION: &str = "Recycle Bin Manager";

/// Autostart switch. Enabled exactly when the startup shortcut exists.
pub struct Autostart {
    startup_dir: PathBuf,
    exe_path: PathBuf,
    writer: Box<dyn ShortcutWriter>,
}

impl Autostart {
    /// Autostart for `exe_path` with shortcuts placed in `startup_dir`.
    pub fn new(
        startup_dir: impl Into<PathBuf>,
        exe_path: impl Into<PathBuf>,
        writer: Box<dyn ShortcutWriter>,
    ) -> Self {
        Self {
            startup_dir: startup_dir.into(),
            exe_path: exe_path.into(),
            writer,
        }
    }

    /// Autostart for the running executable in the user's Startup folder.
    #[track_caller]
    pub fn for_current_exe(writer: Box<dyn ShortcutWriter>) -> CoreResult<Self> {
        let exe_path = std::env::current_exe().map_err(|e| TrayError::AutostartError {
            reason: format!("Failed to get executable path: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Self::new(Self::startup_folder()?, exe_path, writer))
    }

    /// `%APPDATA%\Microsoft\Windows\Start Menu\Programs\Startup`.
    #[track_caller]
    pub fn startup_folder() -> CoreResult<PathBuf> {
        let base_dirs = BaseDirs::new().ok_or_else(|| TrayError::AutostartError {
            reason: "Failed to get user directories".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(base_dirs
            .config_dir()
            .join("Microsoft")
            .join("Windows")
            .join("Start Menu")
            .join("Programs")
            .join("Startup"))
    }

    /// `<startup dir>/<exe stem>.lnk`.
    pub fn shortcut_path(&self) -> PathBuf {
        let stem = self
            .exe_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "recycle-tray".to_string());

        self.startup_dir.join(format!("{}.lnk", stem))
    }

    /// Whether the startup shortcut exists.
    pub fn is_enabled(&self) -> bool {
        self.shortcut_path().exists()
    }

    /// Create the startup shortcut. Returns `false` on any failure.
    #[instrument(skip(self))]
    pub fn enable(&self) -> bool {
        let shortcut = Shortcut {
            path: self.shortcut_path(),
            target: self.exe_path.clone(),
            working_dir: self
                .exe_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
            description: SHORTCUT_DESCRIPTION.to_string(),
        };

        match self.writer.create(&shortcut) {
            Ok(()) => {
                info!(shortcut = ?shortcut.path, "Autostart enabled");
                true
            }
            Err(e) => {
                error!(error = ?e, "Failed to enable autostart");
                false
            }
        }
    }

    /// Remove the startup shortcut.
    ///
    /// Returns `false` when removal fails and also when there was no
    /// shortcut to remove.
    #[instrument(skip(self))]
    pub fn disable(&self) -> bool {
        let path = self.shortcut_path();

        if !path.exists() {
            warn!(shortcut = ?path, "Autostart shortcut not present");
            return false;
        }

        match fs::remove_file(&path) {
            Ok(()) => {
                info!(shortcut = ?path, "Autostart disabled");
                true
            }
            Err(e) => {
                error!(error = ?e, "Failed to disable autostart");
                false
            }
        }
    }
}
