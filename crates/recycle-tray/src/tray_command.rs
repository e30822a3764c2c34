use recycle_tray_core::{BinStatus, CoreResult};

use tray_icon::{TrayIconEvent, menu::MenuEvent};

/// Events delivered to the main UI thread.
///
/// The main thread owns `TrayManager` (because `TrayIcon` is `!Send`), so
/// poll results and toolkit events all flow through this enum.
#[derive(Debug)]
pub enum TrayCommand {
    /// Result of a recycle bin status poll.
    Status(CoreResult<BinStatus>),
    /// A tray menu item was clicked.
    Menu(MenuEvent),
    /// The tray icon itself was clicked.
    TrayIcon(TrayIconEvent),
}
