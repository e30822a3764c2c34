//! Presentation and menu handling.
//!
//! [`Controller`] turns bin status into tray state and routes menu commands
//! to the shell, autostart, desktop icon and settings adapters.

#[allow(clippy::module_inception)]
mod controller;
mod menu_command;
mod menu_state;
mod notice;
mod ports;
mod tray_appearance;

pub use {
    controller::{AppContext, Controller},
    menu_command::{Flow, MenuCommand},
    menu_state::MenuState,
    notice::Notice,
    ports::{Notifier, RefreshHandle, TrayView},
    tray_appearance::{TOOLTIP_TITLE, TrayAppearance},
};
