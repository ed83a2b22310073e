use std::io::{self, Write};

use snafu::prelude::*;

use crate::domain::entity::CycleProgress;
use crate::domain::outbound::{RenderError, RenderPort};
use crate::domain::timer::ProgressFrame;

/// A [`RenderPort`] implementation which redraws a single terminal line in
/// place, using a carriage return instead of growing the scrollback.
#[derive(Debug, Clone, Default)]
pub struct TerminalRenderer;

impl TerminalRenderer {
    /// Creates a new [`TerminalRenderer`].
    pub fn new() -> Self {
        Self
    }
}

impl RenderPort for TerminalRenderer {
    fn banner(&self, progress: &CycleProgress) -> Result<(), RenderError> {
        let mut stdout = io::stdout().lock();
        whatever!(
            writeln!(stdout, "\r\r {progress} Ctrl+C to exit"),
            "Could not write to the terminal",
        );
        Ok(())
    }

    fn draw(&self, frame: &ProgressFrame) -> Result<(), RenderError> {
        let mut stdout = io::stdout().lock();
        whatever!(write!(stdout, "\r {frame}"), "Could not write to the terminal");
        whatever!(stdout.flush(), "Could not write to the terminal");
        Ok(())
    }

    fn finish(&self) -> Result<(), RenderError> {
        let mut stdout = io::stdout().lock();
        whatever!(writeln!(stdout), "Could not write to the terminal");
        Ok(())
    }
}
