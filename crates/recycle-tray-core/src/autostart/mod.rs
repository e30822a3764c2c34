//! Launch at login via a shortcut in the user's Startup folder.

#[cfg(target_os = "windows")]
mod powershell;
mod shortcut;
mod startup;

pub use {
    shortcut::{Shortcut, ShortcutWriter},
    startup::Autostart,
};

#[cfg(target_os = "windows")]
pub use powershell::PowerShellShortcutWriter;
