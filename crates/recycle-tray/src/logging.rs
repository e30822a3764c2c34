//! Log setup: daily rolling file plus stderr.

use crate::{AppError, AppResult};

use std::{
    fs,
    panic::Location,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use error_location::ErrorLocation;
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is not set.
pub(crate) const DEFAULT_FILTER: &str = "recycle_tray=info,recycle_tray_core=info";

const LOG_FILE_PREFIX: &str = "recycle-tray";

/// `<data dir>/logs` for this application.
#[track_caller]
pub(crate) fn log_directory() -> AppResult<PathBuf> {
    let dirs = ProjectDirs::from("", "RecycleBinManager", "RecycleManager").ok_or_else(|| {
        AppError::Logging {
            reason: "Failed to determine data directory".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    })?;

    Ok(dirs.data_dir().join("logs"))
}

/// `RUST_LOG` if set and valid, otherwise [`DEFAULT_FILTER`].
pub(crate) fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Build the daily rolling appender in `log_dir`, creating it if needed.
#[track_caller]
pub(crate) fn file_appender(log_dir: &Path) -> AppResult<RollingFileAppender> {
    fs::create_dir_all(log_dir)?;

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .build(log_dir)
        .map_err(|e| AppError::Logging {
            reason: format!("Failed to create log file appender: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop and must be held for
/// the life of the process.
pub(crate) fn init() -> AppResult<WorkerGuard> {
    let appender = file_appender(&log_directory()?)?;
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| AppError::Logging {
            reason: format!("Failed to install subscriber: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(guard)
}
