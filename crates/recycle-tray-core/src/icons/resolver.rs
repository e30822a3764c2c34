//! Icon lookup for both layouts the application ships in.
//!
//! A packaged build keeps `icons/` next to the executable; a development
//! build reads the crate's `resources/` directory.

use crate::{
    CoreResult, TrayError,
    icons::{BinIcon, COMMON_ICONS_DIR, CommonIcon, ICON_SETS_DIR},
};

use std::{
    fs,
    panic::Location,
    path::{Path, PathBuf},
};

use error_location::ErrorLocation;
use tracing::{debug, info, instrument, warn};

/// Maps logical icon names to files under a resource base directory.
#[derive(Debug, Clone)]
pub struct IconResolver {
    base: PathBuf,
}

impl IconResolver {
    /// Create a resolver rooted at `base`.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Pick the resource base directory.
    ///
    /// Uses `exe_dir` when it carries an `icons/` directory (packaged
    /// layout), otherwise falls back to `dev_root`.
    pub fn resource_base(exe_dir: Option<&Path>, dev_root: &Path) -> PathBuf {
        match exe_dir {
            Some(dir) if dir.join("icons").is_dir() => dir.to_path_buf(),
            _ => dev_root.to_path_buf(),
        }
    }

    /// Base directory all lookups are relative to.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Absolute path of a resource, which must exist.
    #[track_caller]
    pub fn resource_path(&self, relative: impl AsRef<Path>) -> CoreResult<PathBuf> {
        let full_path = self.base.join(relative);

        if !full_path.exists() {
            return Err(TrayError::NotFound {
                path: full_path,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(full_path)
    }

    /// Path of a state icon in the given theme.
    #[track_caller]
    pub fn bin_icon(&self, theme: &str, icon: BinIcon) -> CoreResult<PathBuf> {
        self.resource_path(Path::new(ICON_SETS_DIR).join(theme).join(icon.file_name()))
    }

    /// Path of a shared status icon.
    #[track_caller]
    pub fn common_icon(&self, icon: CommonIcon) -> CoreResult<PathBuf> {
        self.resource_path(Path::new(COMMON_ICONS_DIR).join(icon.file_name()))
    }

    /// Names of all theme directories, sorted.
    #[track_caller]
    pub fn list_icon_sets(&self) -> CoreResult<Vec<String>> {
        let sets_dir = self.resource_path(ICON_SETS_DIR)?;

        let mut sets = Vec::new();
        for entry in fs::read_dir(&sets_dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => sets.push(name),
                Err(name) => warn!(name = ?name, "Skipping icon set with non UTF-8 name"),
            }
        }

        sets.sort();

        Ok(sets)
    }

    /// Check every theme and the common pool for their required icons.
    ///
    /// Meant to run once at startup; the first missing file is reported
    /// as [`TrayError::MissingIcon`].
    #[track_caller]
    #[instrument(skip(self), fields(base = ?self.base))]
    pub fn verify_all_icons(&self) -> CoreResult<()> {
        let sets = match self.list_icon_sets() {
            Ok(sets) => sets,
            Err(TrayError::NotFound { path, .. }) => {
                return Err(TrayError::MissingIcon {
                    path,
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            Err(e) => return Err(e),
        };

        for set in &sets {
            for icon in BinIcon::REQUIRED {
                let path = self
                    .base
                    .join(ICON_SETS_DIR)
                    .join(set)
                    .join(icon.file_name());
                Self::require(path)?;
            }
        }

        for icon in CommonIcon::REQUIRED {
            Self::require(self.base.join(COMMON_ICONS_DIR).join(icon.file_name()))?;
        }

        info!(icon_sets = sets.len(), "All icons verified");

        Ok(())
    }

    #[track_caller]
    fn require(path: PathBuf) -> CoreResult<()> {
        if path.is_file() {
            debug!(path = ?path, "Icon found");
            Ok(())
        } else {
            Err(TrayError::MissingIcon {
                path,
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }
}
