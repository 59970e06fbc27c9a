//! Notification surfaces for the alarm notice

use notify_rust::Notification;
use tokio::runtime::Handle;
use tracing::{info, warn};

use crate::alarm::{AlarmNotice, NotificationSurface};

/// Writes the notice to the log. The notice itself is served on `/status`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSurface;

impl NotificationSurface for LogSurface {
    fn show(&mut self, notice: &AlarmNotice) {
        warn!(
            "{}: {} ({} phase finished, POST /alarm/dismiss to continue)",
            notice.title,
            notice.message,
            notice.expired_phase.as_str()
        );
    }

    fn dismiss(&mut self) {
        info!("Alarm dismissed");
    }
}

fn send_notification(title: &str, message: &str) {
    let result = Notification::new()
        .summary(title)
        .body(message)
        .timeout(0) // No auto-dismiss
        .show();

    if let Err(e) = result {
        warn!("Failed to show desktop notification: {}", e);
    }
}

/// Raises a desktop notification in addition to logging the notice
#[derive(Debug, Default, Clone, Copy)]
pub struct DesktopSurface {
    log: LogSurface,
}

impl DesktopSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NotificationSurface for DesktopSurface {
    fn show(&mut self, notice: &AlarmNotice) {
        self.log.show(notice);

        let title = notice.title.clone();
        let message = notice.message.clone();
        // The notification bus call blocks, keep it off the event loop
        match Handle::try_current() {
            Ok(handle) => {
                handle.spawn_blocking(move || send_notification(&title, &message));
            }
            Err(_) => send_notification(&title, &message),
        }
    }

    fn dismiss(&mut self) {
        self.log.dismiss();
    }
}
