use std::time::Duration;

use thiserror::Error;

use crate::domain::SessionState;

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("progress display could not be drawn: {message}")]
    Render { message: String },
}

/// One refresh of the progress display for the active period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressFrame<'a> {
    pub state: SessionState,
    pub label: &'a str,
    pub fraction: f64,
    pub elapsed: Duration,
    pub remaining: Duration,
}

pub trait ProgressDisplay: Send {
    fn render(&mut self, frame: &ProgressFrame<'_>) -> Result<(), DisplayError>;

    /// Flushes the active bar to 100% and releases it.
    fn finalize(&mut self) -> Result<(), DisplayError>;
}
