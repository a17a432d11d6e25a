//! Notifier that forwards notifications to the log

use crate::domain::ports::{Notification, Notifier};

/// Emits each notification as a `tracing` info record
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: &Notification) {
        tracing::info!(
            target: "themesync::notify",
            title = %notification.title,
            "{}",
            notification.message
        );
    }
}
