use crate::{shell::BinStatus, size_format::format_size};

use std::path::PathBuf;

/// Tooltip title, also the whole tooltip while status is unknown.
pub const TOOLTIP_TITLE: &str = "Менеджер Корзины";

/// What the tray icon currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrayAppearance {
    /// Icon file, `None` for a blank icon.
    pub icon: Option<PathBuf>,
    /// Tooltip text.
    pub tooltip: String,
}

impl TrayAppearance {
    /// Tooltip text for a status, or the bare title when the status is unknown.
    pub fn tooltip_for(status: Option<&BinStatus>) -> String {
        match status {
            Some(status) => format!(
                "{}\nЭлементов: {}\nЗанято: {}",
                TOOLTIP_TITLE,
                status.item_count,
                format_size(status.total_bytes)
            ),
            None => TOOLTIP_TITLE.to_string(),
        }
    }
}
