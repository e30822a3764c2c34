#[allow(clippy::module_inception)]
mod settings;
mod store;

pub use {settings::Settings, store::SettingsStore};

use crate::icons::DEFAULT_ICON_SET;

pub(crate) const DEFAULT_SHOW_NOTIFICATIONS: bool = true;

pub(crate) fn default_show_notifications() -> bool {
    DEFAULT_SHOW_NOTIFICATIONS
}

pub(crate) fn default_icon_set() -> String {
    DEFAULT_ICON_SET.to_string()
}
