use snafu::prelude::*;

/// Upper bound of progress bar cells drawn for one interval.
const MAX_BAR_WIDTH: u64 = 25;

/// The length of a single work or break interval, measured in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct IntervalDuration(u64);

impl IntervalDuration {
    /// Try to create an [`IntervalDuration`] from a u64 integer.
    ///
    /// # Errors
    ///
    /// This function will return an error if the integer is zero.
    pub fn try_new(minutes: u64) -> Result<Self, TryNewIntervalDurationError> {
        ensure!(minutes > 0, ZeroSnafu);
        Ok(Self(minutes))
    }

    /// Returns the length of this interval in minutes.
    pub fn minutes(&self) -> u64 {
        self.0
    }

    /// Returns the length of this interval in seconds.
    pub fn seconds(&self) -> u64 {
        self.0 * 60
    }

    /// Returns the number of cells in the progress bar drawn for this
    /// interval. Long intervals are capped so the bar stays on one line.
    pub fn bar_width(&self) -> usize {
        self.0.min(MAX_BAR_WIDTH) as usize
    }
}

impl TryFrom<u64> for IntervalDuration {
    type Error = TryNewIntervalDurationError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

/// An error type of creating an [`IntervalDuration`].
#[derive(Debug, Clone, Snafu, PartialEq, Eq)]
#[non_exhaustive]
pub enum TryNewIntervalDurationError {
    #[snafu(display("Interval must be longer than zero minutes"))]
    #[non_exhaustive]
    Zero,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_duration_try_new() {
        assert_eq!(IntervalDuration::try_new(25), Ok(IntervalDuration(25)));
        assert_eq!(
            IntervalDuration::try_new(0),
            Err(TryNewIntervalDurationError::Zero),
        );
    }

    #[test]
    fn interval_duration_try_from() {
        assert_eq!(5.try_into(), Ok(IntervalDuration(5)));
        assert_eq!(
            0.try_into(),
            Err::<IntervalDuration, TryNewIntervalDurationError>(TryNewIntervalDurationError::Zero)
        );
    }

    #[test]
    fn interval_duration_seconds() {
        let duration = IntervalDuration::try_new(25).unwrap();
        assert_eq!(duration.minutes(), 25);
        assert_eq!(duration.seconds(), 1500);
    }

    #[test]
    fn interval_duration_bar_width_is_capped() {
        assert_eq!(IntervalDuration::try_new(1).unwrap().bar_width(), 1);
        assert_eq!(IntervalDuration::try_new(25).unwrap().bar_width(), 25);
        assert_eq!(IntervalDuration::try_new(180).unwrap().bar_width(), 25);
    }
}
