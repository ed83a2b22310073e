use std::error::Error as StdError;

use snafu::prelude::*;

use crate::domain::entity::{CycleProgress, NotificationMessage};
use crate::domain::timer::ProgressFrame;

/// A public port for alerting the user at an interval boundary.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait NotifyPort: Send + Sync + 'static {
    /// Do the notification operation.
    ///
    /// # Errors
    ///
    /// This function will return an error if failed to make a notification.
    async fn notify(&self, message: &NotificationMessage) -> Result<(), NotifyError>;
}

/// An error type of the notification operation.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum NotifyError {
    #[snafu(whatever, display("Could not emit a notification: {message}"))]
    Unknown {
        message: String,
        #[snafu(source(from(Box<dyn StdError>, Some)))]
        source: Option<Box<dyn StdError>>,
    },
}

/// A public port for the countdown progress display. Drawing a frame
/// replaces the previously drawn one instead of growing the scrollback.
#[cfg_attr(test, mockall::automock)]
pub trait RenderPort: Send + Sync + 'static {
    /// Show which cycle is about to start.
    ///
    /// # Errors
    ///
    /// This function will return an error if the display could not be
    /// written.
    fn banner(&self, progress: &CycleProgress) -> Result<(), RenderError>;

    /// Draw one progress frame over the previous one.
    ///
    /// # Errors
    ///
    /// This function will return an error if the display could not be
    /// written.
    fn draw(&self, frame: &ProgressFrame) -> Result<(), RenderError>;

    /// Leave the last drawn frame behind and move on to a fresh line.
    ///
    /// # Errors
    ///
    /// This function will return an error if the display could not be
    /// written.
    fn finish(&self) -> Result<(), RenderError>;
}

/// An error type of the progress display operations.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum RenderError {
    #[snafu(whatever, display("Could not render the progress display: {message}"))]
    Unknown {
        message: String,
        #[snafu(source(from(Box<dyn StdError>, Some)))]
        source: Option<Box<dyn StdError>>,
    },
}
