use crate::domain::entity::NotificationMessage;
use crate::domain::outbound::{NotifyError, NotifyPort};
use crate::notify::{Announce, Notifier};

/// A [`NotifyPort`] implementation which echoes the message to standard
/// output and fans it out to every channel selected for this platform.
/// Delivery is best-effort: a failed channel is reported through tracing
/// and skipped, and the operation as a whole never fails.
pub struct NotifierStack {
    channels: Vec<Notifier>,
}

impl NotifierStack {
    /// Creates a new [`NotifierStack`].
    pub fn new(channels: Vec<Notifier>) -> Self {
        Self { channels }
    }
}

#[async_trait::async_trait]
impl NotifyPort for NotifierStack {
    async fn notify(&self, message: &NotificationMessage) -> Result<(), NotifyError> {
        println!("{}", message.summary());

        for channel in &self.channels {
            if let Err(err) = channel.announce(message).await {
                tracing::warn!(err = %snafu::Report::from_error(&err));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::notify::NoOpNotifier;

    #[tokio::test]
    async fn stack_delivers_to_every_channel() {
        let stack = NotifierStack::new(vec![NoOpNotifier.into(), NoOpNotifier.into()]);
        let message = NotificationMessage::try_new("It is time to work".into(), None).unwrap();
        assert!(stack.notify(&message).await.is_ok());
    }

    #[tokio::test]
    async fn empty_stack_still_echoes() {
        let stack = NotifierStack::new(Vec::new());
        let message = NotificationMessage::try_new("It is time to work".into(), None).unwrap();
        assert!(stack.notify(&message).await.is_ok());
    }
}
