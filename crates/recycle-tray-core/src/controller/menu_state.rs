/// State the tray menu mirrors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuState {
    /// Startup shortcut exists.
    pub autostart: bool,
    /// Notifications are enabled.
    pub show_notifications: bool,
    /// Recycle bin icon is shown on the desktop.
    pub desktop_icon_visible: bool,
    /// Selected icon theme.
    pub icon_set: String,
    /// Every discovered icon theme, sorted.
    pub icon_sets: Vec<String>,
}
