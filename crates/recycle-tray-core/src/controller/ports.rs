use crate::controller::{MenuState, Notice, TrayAppearance};

/// The tray icon and its menu, as seen by the controller.
///
/// Implemented on the UI thread; the tray icon itself is `!Send`.
pub trait TrayView {
    /// Replace the tray icon and tooltip.
    fn show(&mut self, appearance: &TrayAppearance);

    /// Bring check marks and the theme selection in line with `state`.
    fn sync_menu(&mut self, state: &MenuState);
}

/// Shows desktop notifications.
pub trait Notifier {
    /// Display `notice`. Failures are the implementor's to log.
    fn notify(&self, notice: &Notice);
}

/// Asks the status poller for an out-of-schedule refresh.
pub trait RefreshHandle {
    /// Request a refresh. Repeated requests before the poll runs collapse into one.
    fn request(&self);
}
