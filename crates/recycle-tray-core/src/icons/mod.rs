mod bin_icon;
mod common_icon;
mod resolver;

pub use {bin_icon::BinIcon, common_icon::CommonIcon, resolver::IconResolver};

/// Directory holding one sub-directory per icon theme.
pub const ICON_SETS_DIR: &str = "icons/icon_sets";

/// Directory holding the theme-independent icons.
pub const COMMON_ICONS_DIR: &str = "icons/common";

/// Theme used when none has been chosen.
pub const DEFAULT_ICON_SET: &str = "default";
