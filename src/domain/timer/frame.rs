use std::fmt::{Display, Formatter, Result as FmtResult};

const FILLED_CELL: &str = "🍅";
const EMPTY_CELL: &str = "--";

/// One rendered snapshot of a running countdown: elapsed fraction, filled
/// and empty bar cells, and the remaining time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressFrame {
    elapsed: u64,
    total: u64,
    width: usize,
}

impl ProgressFrame {
    /// Creates a new [`ProgressFrame`]. `elapsed` and `total` are seconds;
    /// `width` is the number of bar cells.
    pub fn new(elapsed: u64, total: u64, width: usize) -> Self {
        Self {
            elapsed,
            total,
            width,
        }
    }

    /// Returns the elapsed seconds of this [`ProgressFrame`].
    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }

    /// Returns the total seconds of the interval this frame belongs to.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// The fraction of the interval which has elapsed.
    pub fn fraction(&self) -> f64 {
        self.elapsed as f64 / self.total as f64
    }

    /// The number of filled cells in the bar.
    pub fn filled(&self) -> usize {
        (self.fraction() * self.width as f64).round() as usize
    }

    /// The seconds left until the interval ends.
    pub fn remaining(&self) -> u64 {
        self.total.saturating_sub(self.elapsed)
    }
}

impl Display for ProgressFrame {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let filled = self.filled();
        let remaining = self.remaining();

        write!(
            f,
            "{}{} [{:.0}%] {}:{} ⏰",
            FILLED_CELL.repeat(filled),
            EMPTY_CELL.repeat(self.width - filled),
            self.fraction() * 100.0,
            remaining / 60,
            remaining % 60,
        )
    }
}
