/// Every action the tray menu can trigger.
///
/// Check items carry the state the user just switched them to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuCommand {
    /// Open the recycle bin folder.
    OpenBin,
    /// Empty the recycle bin.
    EmptyBin,
    /// Turn launch-at-login on or off.
    SetAutostart(bool),
    /// Turn notifications on or off.
    SetNotifications(bool),
    /// Show or hide the recycle bin icon on the desktop.
    SetDesktopIconVisible(bool),
    /// Switch to the named icon theme.
    SelectIconSet(String),
    /// Quit the application.
    Exit,
}

/// What the event loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Exit,
}
