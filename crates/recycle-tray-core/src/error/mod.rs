use std::{panic::Location, path::PathBuf};

use error_location::ErrorLocation;
use thiserror::Error;

/// Recycle bin, resource and settings errors with source location tracking.
#[derive(Error, Debug)]
pub enum TrayError {
    /// The shell could not report recycle bin status.
    ///
    /// `code` is the raw HRESULT, or `None` when the query never returned
    /// (timed out or the worker task died).
    #[error("Recycle bin query failed (code: {code:?}) {location}")]
    QueryFailed {
        /// Raw status code reported by the shell, if any.
        code: Option<i32>,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The recycle bin folder could not be opened.
    #[error("Failed to open recycle bin: {reason} {location}")]
    OpenFailed {
        /// Description of the failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Failed to empty the recycle bin before the shell produced a result code.
    #[error("Failed to empty recycle bin: {reason} {location}")]
    EmptyFailed {
        /// Description of the failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A resource file does not exist.
    #[error("Resource not found: {path:?} {location}")]
    NotFound {
        /// Resolved path that was missing.
        path: PathBuf,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A required icon is missing from a theme or the common pool.
    #[error("Required icon missing: {path:?} {location}")]
    MissingIcon {
        /// Path of the missing icon.
        path: PathBuf,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Registry read or write failed.
    #[error("Registry error: {reason} {location}")]
    RegistryError {
        /// Description of the failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Startup shortcut could not be created or removed.
    #[error("Autostart error: {reason} {location}")]
    AutostartError {
        /// Description of the failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Settings loading or saving error.
    #[error("Configuration error: {reason} {location}")]
    ConfigError {
        /// Human-readable reason for failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// IO error from filesystem operations.
    #[error("IO error: {source} {location}")]
    IoError {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

impl TrayError {
    /// Build a `QueryFailed` carrying the raw shell status code.
    #[track_caller]
    pub fn query_failed(code: Option<i32>) -> Self {
        TrayError::QueryFailed {
            code,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<std::io::Error> for TrayError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        TrayError::IoError {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Result type alias using [`TrayError`].
pub type Result<T> = std::result::Result<T, TrayError>;
