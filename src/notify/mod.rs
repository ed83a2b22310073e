mod beep;
mod desktop;
mod noop;
mod speech;
mod stack;

pub use beep::BeepNotifier;
pub use desktop::DesktopNotifier;
pub use noop::NoOpNotifier;
pub use speech::SpeechNotifier;
pub use stack::NotifierStack;

use crate::domain::entity::NotificationMessage;
use crate::domain::outbound::NotifyError;

/// Channel-specific delivery of one notification.
#[enum_dispatch::enum_dispatch]
pub(crate) trait Announce {
    async fn announce(&self, message: &NotificationMessage) -> Result<(), NotifyError>;
}

/// One notification channel, selected for the host platform at startup.
#[enum_dispatch::enum_dispatch(Announce)]
#[derive(Debug)]
pub enum Notifier {
    Desktop(DesktopNotifier),
    Speech(SpeechNotifier),
    Beep(BeepNotifier),
    NoOp(NoOpNotifier),
}
