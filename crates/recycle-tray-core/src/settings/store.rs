//! Settings persistence.
//!
//! Reads and writes a TOML file in the per-user config directory. Writes
//! go through a temp file and a rename so a crash never leaves a torn file.

use crate::{CoreResult, TrayError, settings::Settings};

use std::{
    fs,
    io::Write,
    panic::Location,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use error_location::ErrorLocation;
use tracing::{debug, info, instrument};

const ORGANIZATION: &str = "RecycleBinManager";
const APPLICATION: &str = "RecycleManager";
const SETTINGS_FILE: &str = "settings.toml";

/// File-backed store for [`Settings`].
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Store backed by an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the user's config directory, created if needed.
    #[track_caller]
    #[instrument]
    pub fn user_default() -> CoreResult<Self> {
        let proj_dirs =
            ProjectDirs::from("", ORGANIZATION, APPLICATION).ok_or_else(|| {
                TrayError::ConfigError {
                    reason: "Failed to get config directory".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

        let config_dir = proj_dirs.config_dir();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
            debug!(config_dir = ?config_dir, "Created config directory");
        }

        Ok(Self::new(config_dir.join(SETTINGS_FILE)))
    }

    /// Path of the settings file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, falling back to defaults when no file exists yet.
    ///
    /// Keys missing from the file take their default value.
    #[track_caller]
    #[instrument(skip(self), fields(path = ?self.path))]
    pub fn load(&self) -> CoreResult<Settings> {
        if !self.path.exists() {
            info!("No settings file found, using defaults");
            return Ok(Settings::default());
        }

        let contents = fs::read_to_string(&self.path).map_err(|e| TrayError::ConfigError {
            reason: format!("Failed to read settings: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| TrayError::ConfigError {
            reason: format!("Failed to parse settings: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(?settings, "Settings loaded");

        Ok(settings)
    }

    /// Save settings using the atomic write pattern.
    #[track_caller]
    #[instrument(skip(self), fields(path = ?self.path))]
    pub fn save(&self, settings: &Settings) -> CoreResult<()> {
        let contents = toml::to_string_pretty(settings).map_err(|e| TrayError::ConfigError {
            reason: format!("Failed to serialize settings: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let temp_path = self.path.with_extension("toml.tmp");

        let mut temp_file = fs::File::create(&temp_path).map_err(|e| TrayError::ConfigError {
            reason: format!("Failed to create temp settings file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        temp_file
            .write_all(contents.as_bytes())
            .map_err(|e| TrayError::ConfigError {
                reason: format!("Failed to write temp settings file: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        temp_file.sync_all().map_err(|e| TrayError::ConfigError {
            reason: format!("Failed to sync temp settings file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        drop(temp_file);

        fs::rename(&temp_path, &self.path).map_err(|e| TrayError::ConfigError {
            reason: format!("Failed to rename temp settings to final: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        debug!("Settings saved (atomic write)");

        Ok(())
    }
}
