use std::sync::Arc;

use snafu::prelude::*;
use tokio::time::{sleep, Duration, Instant};

use crate::domain::entity::IntervalDuration;
use crate::domain::outbound::{RenderError, RenderPort};
use crate::domain::timer::frame::ProgressFrame;

/// Cadence of progress updates. Best-effort; elapsed time is recomputed
/// from the start instant on every tick.
const TICK: Duration = Duration::from_secs(1);

/// A blocking countdown over a single interval, reporting progress through
/// a [`RenderPort`] once per tick until the interval has elapsed.
pub struct Countdown {
    renderer: Arc<dyn RenderPort>,
}

impl Countdown {
    /// Creates a new [`Countdown`].
    pub fn new(renderer: Arc<dyn RenderPort>) -> Self {
        Self { renderer }
    }

    /// Run the countdown for one interval, returning once the interval has
    /// elapsed.
    ///
    /// # Errors
    ///
    /// This function will return an error if a progress frame could not be
    /// rendered.
    pub async fn run(&self, duration: &IntervalDuration) -> Result<(), RunCountdownError> {
        let total = duration.seconds();
        let width = duration.bar_width();
        let start = Instant::now();

        loop {
            let elapsed = start.elapsed().as_secs_f64().round() as u64;

            if elapsed >= total {
                self.renderer.finish().context(RenderSnafu)?;
                break Ok(());
            }

            let frame = ProgressFrame::new(elapsed, total, width);
            self.renderer.draw(&frame).context(RenderSnafu)?;
            sleep(TICK).await;
        }
    }
}

/// An error for running a countdown.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum RunCountdownError {
    #[snafu(display("Could not draw the progress display"))]
    Render { source: RenderError },
}
