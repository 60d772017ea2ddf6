mod event;
mod session_controller;
mod session_state;
mod timer;

pub use event::{Event, EventKind, SoundCue};
pub use session_controller::{
    next_state, SessionController, SessionError, SessionSummary, POLL_INTERVAL,
};
pub use session_state::SessionState;
pub use timer::{Timer, TimerError};
