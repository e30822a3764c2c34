use recycle_tray_core::{Notice, Notifier};

use notify_rust::{Notification, Timeout};
use tracing::{debug, error};

const APP_NAME: &str = "Менеджер Корзины";

/// How long a toast stays on screen, in milliseconds.
pub(crate) const NOTIFICATION_TIMEOUT_MS: u32 = 5_000;

/// Windows toast notifications.
#[derive(Debug, Default, Clone, Copy)]
pub struct ToastNotifier;

impl Notifier for ToastNotifier {
    fn notify(&self, notice: &Notice) {
        let mut notification = Notification::new();
        notification
            .summary(&notice.title)
            .body(&notice.body)
            .appname(APP_NAME)
            .timeout(Timeout::Milliseconds(NOTIFICATION_TIMEOUT_MS));

        if let Some(icon) = notice.icon.as_ref().and_then(|p| p.to_str()) {
            notification.icon(icon);
        }

        match notification.show() {
            Ok(_) => debug!(title = %notice.title, "Notification shown"),
            Err(e) => error!(error = ?e, title = %notice.title, "Failed to show notification"),
        }
    }
}
