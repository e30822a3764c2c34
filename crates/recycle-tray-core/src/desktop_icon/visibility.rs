use crate::desktop_icon::{DesktopIconFlag, FLAG_HIDDEN, FLAG_VISIBLE};

use tracing::{error, info, instrument, warn};

/// Reads and toggles desktop icon visibility. Never fails outward.
pub struct DesktopIconVisibility {
    flag: Box<dyn DesktopIconFlag>,
}

impl DesktopIconVisibility {
    /// Wrap a flag store.
    pub fn new(flag: Box<dyn DesktopIconFlag>) -> Self {
        Self { flag }
    }

    /// `true` unless the flag says hidden. Read errors count as visible.
    #[instrument(skip(self))]
    pub fn is_visible(&self) -> bool {
        match self.flag.read() {
            Ok(Some(value)) => value == FLAG_VISIBLE,
            Ok(None) => true,
            Err(e) => {
                warn!(error = ?e, "Failed to read desktop icon flag, assuming visible");
                true
            }
        }
    }

    /// Write the flag and refresh the desktop. Returns whether the write succeeded.
    #[instrument(skip(self))]
    pub fn set_visible(&self, visible: bool) -> bool {
        let value = if visible { FLAG_VISIBLE } else { FLAG_HIDDEN };

        if let Err(e) = self.flag.write(value) {
            error!(error = ?e, "Failed to toggle desktop icon");
            return false;
        }

        self.flag.notify_shell();

        info!(visible, "Desktop icon visibility changed");

        true
    }
}
