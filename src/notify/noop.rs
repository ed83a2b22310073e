use crate::domain::entity::NotificationMessage;
use crate::domain::outbound::NotifyError;
use crate::notify::Announce;

/// A channel which silently discards every message, for platforms with no
/// supported notification mechanism.
#[derive(Debug, Clone, Default)]
pub struct NoOpNotifier;

impl Announce for NoOpNotifier {
    async fn announce(&self, _message: &NotificationMessage) -> Result<(), NotifyError> {
        Ok(())
    }
}
