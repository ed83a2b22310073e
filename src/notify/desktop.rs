use notify_rust::Notification;
use snafu::prelude::*;

use crate::domain::entity::NotificationMessage;
use crate::domain::outbound::NotifyError;
use crate::notify::Announce;

/// A channel which shows the message as a desktop popup.
#[derive(Debug, Clone)]
pub struct DesktopNotifier {
    app_name: String,
}

impl DesktopNotifier {
    /// Creates a new [`DesktopNotifier`].
    pub fn new(app_name: String) -> Self {
        Self { app_name }
    }
}

impl Announce for DesktopNotifier {
    async fn announce(&self, message: &NotificationMessage) -> Result<(), NotifyError> {
        let mut notification = Notification::new();
        notification.appname(&self.app_name);
        notification.summary(message.summary());

        if let Some(body) = message.body() {
            notification.body(body);
        }

        let _ = whatever!(
            notification.show_async().await,
            "Could not show desktop notification",
        );

        Ok(())
    }
}
