/// Status icons shared by all themes, used for notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommonIcon {
    /// Autostart was switched on.
    AutostartEnabled,
    /// Autostart was switched off.
    AutostartDisabled,
    /// Notifications were switched on.
    NotificationsEnabled,
}

impl CommonIcon {
    /// Every icon the common pool must contain.
    pub const REQUIRED: [CommonIcon; 3] = [
        CommonIcon::AutostartEnabled,
        CommonIcon::AutostartDisabled,
        CommonIcon::NotificationsEnabled,
    ];

    /// File name inside `icons/common`.
    pub fn file_name(self) -> &'static str {
        match self {
            CommonIcon::AutostartEnabled => "autostart-enabled.ico",
            CommonIcon::AutostartDisabled => "autostart-disabled.ico",
            CommonIcon::NotificationsEnabled => "notifications-enabled.ico",
        }
    }
}
