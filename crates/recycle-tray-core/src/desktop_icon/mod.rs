//! Whether the recycle bin icon is shown on the desktop.

mod flag;
#[cfg(target_os = "windows")]
mod registry;
mod visibility;

pub use {flag::DesktopIconFlag, visibility::DesktopIconVisibility};

#[cfg(target_os = "windows")]
pub use registry::RegistryDesktopIconFlag;

/// Flag value for a visible icon.
pub const FLAG_VISIBLE: u32 = 0;

/// Flag value for a hidden icon.
pub const FLAG_HIDDEN: u32 = 1;
