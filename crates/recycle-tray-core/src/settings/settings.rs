use crate::settings::{default_icon_set, default_show_notifications};

use serde::{Deserialize, Serialize};

/// User preferences persisted between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Whether tray notifications are shown.
    #[serde(default = "default_show_notifications")]
    pub show_notifications: bool,
    /// Name of the selected icon theme.
    #[serde(default = "default_icon_set")]
    pub icon_set: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_notifications: default_show_notifications(),
            icon_set: default_icon_set(),
        }
    }
}
