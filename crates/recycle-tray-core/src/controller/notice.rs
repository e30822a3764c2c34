use std::path::PathBuf;

/// A notification to show to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Notification title.
    pub title: String,
    /// Notification text.
    pub body: String,
    /// Icon file, `None` for no icon.
    pub icon: Option<PathBuf>,
}
