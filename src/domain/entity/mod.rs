pub mod cycle;
pub mod duration;
pub mod notification;
pub mod stage;

pub use cycle::{CycleCount, CycleProgress};
pub use duration::IntervalDuration;
pub use notification::NotificationMessage;
pub use stage::Stage;
