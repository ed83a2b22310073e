use std::fmt::{Display, Formatter, Result as FmtResult};

use snafu::prelude::*;

/// The number of work/break pairs to run in one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CycleCount(u32);

impl CycleCount {
    /// Try to create a [`CycleCount`] from a u32 integer.
    ///
    /// # Errors
    ///
    /// This function will return an error if the integer is zero.
    pub fn try_new(count: u32) -> Result<Self, TryNewCycleCountError> {
        ensure!(count > 0, ZeroSnafu);
        Ok(Self(count))
    }

    /// Returns the inner count of this [`CycleCount`].
    pub fn count(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for CycleCount {
    type Error = TryNewCycleCountError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

/// An error type of creating a [`CycleCount`].
#[derive(Debug, Clone, Snafu, PartialEq, Eq)]
#[non_exhaustive]
pub enum TryNewCycleCountError {
    #[snafu(display("Cycle count must be greater than zero"))]
    #[non_exhaustive]
    Zero,
}

/// The position within a run of cycles, counted from one. Shown as a ratio
/// of filled tomato markers over the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleProgress {
    index: u32,
    total: CycleCount,
}

impl CycleProgress {
    /// Creates a new [`CycleProgress`].
    pub fn new(index: u32, total: CycleCount) -> Self {
        Self { index, total }
    }
}

impl Display for CycleProgress {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{}/{}",
            "🍅".repeat(self.index as usize),
            "🍅".repeat(self.total.count() as usize),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_count_try_new() {
        assert_eq!(CycleCount::try_new(4), Ok(CycleCount(4)));
        assert_eq!(CycleCount::try_new(0), Err(TryNewCycleCountError::Zero));
    }

    #[test]
    fn cycle_count_try_from() {
        assert_eq!(2.try_into(), Ok(CycleCount(2)));
        assert_eq!(
            0.try_into(),
            Err::<CycleCount, TryNewCycleCountError>(TryNewCycleCountError::Zero)
        );
    }

    #[test]
    fn cycle_progress_display() {
        let total = CycleCount::try_new(4).unwrap();
        assert_eq!(CycleProgress::new(1, total).to_string(), "🍅/🍅🍅🍅🍅");
        assert_eq!(
            CycleProgress::new(3, total).to_string(),
            "🍅🍅🍅/🍅🍅🍅🍅"
        );
    }
}
