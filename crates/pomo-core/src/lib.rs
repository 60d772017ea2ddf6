//! Pomo core library
//!
//! Contains the pomodoro state machine, the period timer and the port
//! definitions (traits) its collaborators implement.
//! This crate has no knowledge of terminals, sound or desktop notifications.

pub mod config;
pub mod domain;
pub mod ports;

pub use config::{Config, ConfigError, NotificationConfig, NotificationUrgency, SessionConfig};
pub use domain::{
    next_state, Event, EventKind, SessionController, SessionError, SessionState, SessionSummary,
    SoundCue, Timer, TimerError, POLL_INTERVAL,
};
pub use ports::{
    Clock, DisplayError, ManualClock, Notifier, NotifyError, ProgressDisplay, ProgressFrame,
    SystemClock,
};
