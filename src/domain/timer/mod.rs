mod countdown;
mod frame;
mod sequencer;

pub use countdown::{Countdown, RunCountdownError};
pub use frame::ProgressFrame;
pub use sequencer::{RunSequencerError, Sequencer, TimerConfig};
