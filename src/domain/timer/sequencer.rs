use std::sync::Arc;

use snafu::prelude::*;

use crate::domain::entity::{
    CycleCount, CycleProgress, IntervalDuration, NotificationMessage, Stage,
};
use crate::domain::outbound::{NotifyPort, RenderError, RenderPort};
use crate::domain::timer::countdown::{Countdown, RunCountdownError};

/// A type that stores everything the [`Sequencer`] needs to know about one
/// run: interval lengths, the cycle count and the boundary messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerConfig {
    pub work_duration: IntervalDuration,
    pub break_duration: IntervalDuration,
    pub cycles: CycleCount,
    pub work_notification: NotificationMessage,
    pub break_notification: NotificationMessage,
}

impl TimerConfig {
    /// Get the duration corresponding to stage.
    pub fn duration(&self, stage: Stage) -> &IntervalDuration {
        match stage {
            Stage::Work => &self.work_duration,
            Stage::Break => &self.break_duration,
        }
    }

    /// Get the message announced when it is time to enter stage.
    pub fn notification(&self, stage: Stage) -> &NotificationMessage {
        match stage {
            Stage::Work => &self.work_notification,
            Stage::Break => &self.break_notification,
        }
    }
}

/// A type responsible for the timer's main business logic: it drives the
/// configured number of work/break cycles, running a countdown for each
/// stage and notifying the user at every boundary.
pub struct Sequencer {
    config: TimerConfig,
    countdown: Countdown,
    notifier: Arc<dyn NotifyPort>,
    renderer: Arc<dyn RenderPort>,
}

impl Sequencer {
    /// Creates a new [`Sequencer`].
    pub fn new(
        config: TimerConfig,
        countdown: Countdown,
        notifier: Arc<dyn NotifyPort>,
        renderer: Arc<dyn RenderPort>,
    ) -> Self {
        Self {
            config,
            countdown,
            notifier,
            renderer,
        }
    }

    /// Run every configured cycle to completion, then return.
    ///
    /// # Errors
    ///
    /// This function will return an error if the progress display could not
    /// be written. Notification failures are contained and never surface
    /// here.
    pub async fn run(&self) -> Result<(), RunSequencerError> {
        for index in 1..=self.config.cycles.count() {
            let progress = CycleProgress::new(index, self.config.cycles);
            self.renderer.banner(&progress).context(BannerSnafu)?;

            for stage in [Stage::Work, Stage::Break] {
                tracing::debug!(%stage, cycle = index, "Starting countdown");

                self.countdown
                    .run(self.config.duration(stage))
                    .await
                    .context(CountdownSnafu { stage })?;

                self.announce(self.config.notification(stage.next())).await;
            }
        }

        Ok(())
    }

    /// Notify the user that an interval has ended. Best-effort: a failed
    /// notification is reported through tracing and otherwise discarded.
    async fn announce(&self, message: &NotificationMessage) {
        if let Err(err) = self.notifier.notify(message).await {
            tracing::warn!(err = %snafu::Report::from_error(&err));
        }
    }
}

/// An error for running the cycle sequence.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum RunSequencerError {
    #[snafu(display("Could not print the cycle banner"))]
    Banner { source: RenderError },
    #[snafu(display("Could not finish the {stage} countdown"))]
    Countdown {
        stage: Stage,
        source: RunCountdownError,
    },
}
