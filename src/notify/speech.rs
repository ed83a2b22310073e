use snafu::prelude::*;
use tokio::process::Command;

use crate::domain::entity::NotificationMessage;
use crate::domain::outbound::NotifyError;
use crate::notify::Announce;

/// A channel which speaks the message aloud through the system speech
/// synthesizer (`say` on macOS).
#[derive(Debug, Clone)]
pub struct SpeechNotifier {
    voice: String,
}

impl SpeechNotifier {
    /// Creates a new [`SpeechNotifier`].
    pub fn new(voice: String) -> Self {
        Self { voice }
    }
}

impl Announce for SpeechNotifier {
    async fn announce(&self, message: &NotificationMessage) -> Result<(), NotifyError> {
        let status = whatever!(
            Command::new("say")
                .arg("-v")
                .arg(&self.voice)
                .arg(message.summary())
                .status()
                .await,
            "Could not run the speech synthesizer",
        );

        ensure_whatever!(
            status.success(),
            "Speech synthesizer exited with {status}",
        );

        Ok(())
    }
}
