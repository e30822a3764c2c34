//! Recycle Tray Core Library
//!
//! Recycle bin status, presentation and menu handling for the tray
//! application. OS access sits behind small traits ([`RecycleBin`],
//! [`ShortcutWriter`], [`DesktopIconFlag`]) with Windows implementations, so
//! everything above them runs and tests on any platform.
//!
//! # Example
//!
//! ```
//! use recycle_tray_core::{BinStatus, TrayAppearance, format_size};
//!
//! let status = BinStatus { item_count: 5, total_bytes: 2 * 1024 * 1024 };
//! assert_eq!(format_size(status.total_bytes), "2 MB");
//! assert!(TrayAppearance::tooltip_for(Some(&status)).contains("Элементов: 5"));
//! ```

mod autostart;
mod controller;
mod desktop_icon;
mod error;
mod icons;
mod poller;
mod settings;
mod shell;
mod size_format;

pub use {
    autostart::{Autostart, Shortcut, ShortcutWriter},
    controller::{
        AppContext, Controller, Flow, MenuCommand, MenuState, Notice, Notifier, RefreshHandle,
        TOOLTIP_TITLE, TrayAppearance, TrayView,
    },
    desktop_icon::{DesktopIconFlag, DesktopIconVisibility, FLAG_HIDDEN, FLAG_VISIBLE},
    error::{Result as CoreResult, TrayError},
    icons::{BinIcon, COMMON_ICONS_DIR, CommonIcon, DEFAULT_ICON_SET, ICON_SETS_DIR, IconResolver},
    poller::{POLL_INTERVAL, PollerRefresh, QUERY_TIMEOUT, StatusPoller},
    settings::{Settings, SettingsStore},
    shell::{BinStatus, EMPTY_NOTHING_TO_DELETE, EMPTY_OK, EmptyResult, RecycleBin},
    size_format::format_size,
};

#[cfg(target_os = "windows")]
pub use {
    autostart::PowerShellShortcutWriter, desktop_icon::RegistryDesktopIconFlag,
    shell::WindowsShell,
};

#[cfg(test)]
mod tests;
