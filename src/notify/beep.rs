use std::io::{self, Write};

use snafu::prelude::*;

use crate::domain::entity::NotificationMessage;
use crate::domain::outbound::NotifyError;
use crate::notify::Announce;

/// A channel which rings the terminal bell.
#[derive(Debug, Clone, Default)]
pub struct BeepNotifier;

impl BeepNotifier {
    /// Creates a new [`BeepNotifier`].
    pub fn new() -> Self {
        Self
    }
}

impl Announce for BeepNotifier {
    async fn announce(&self, _message: &NotificationMessage) -> Result<(), NotifyError> {
        let mut stdout = io::stdout();
        whatever!(stdout.write_all(b"\x07"), "Could not ring the terminal bell");
        whatever!(stdout.flush(), "Could not ring the terminal bell");
        Ok(())
    }
}
