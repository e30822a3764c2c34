use crate::CoreResult;

/// Storage for the "hide recycle bin on desktop" flag.
pub trait DesktopIconFlag: Send + Sync {
    /// Current flag value, `None` when it was never written.
    fn read(&self) -> CoreResult<Option<u32>>;

    /// Persist a new flag value.
    fn write(&self, value: u32) -> CoreResult<()>;

    /// Tell the shell to redraw the desktop.
    fn notify_shell(&self);
}
