use thiserror::Error;

use crate::domain::Event;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("console output failed: {message}")]
    Output { message: String },

    #[error("sound cue {cue} could not be played: {message}")]
    Sound { cue: String, message: String },

    #[error("desktop notification failed: {message}")]
    Desktop { message: String },
}

/// Receives lifecycle events from the session controller.
///
/// Called synchronously: the controller waits for `notify` to return before
/// starting the period timer. A failure is logged by the caller and never
/// changes the session schedule.
pub trait Notifier: Send {
    fn notify(&self, event: &Event) -> Result<(), NotifyError>;
}

