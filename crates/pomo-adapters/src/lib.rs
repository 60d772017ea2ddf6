//! Pomo adapters - Infrastructure implementations
//!
//! This crate contains concrete implementations of the ports defined in pomo-core:
//! timestamped console lines, desktop notifications with sound cues and the
//! terminal progress bar.

pub mod chain;
pub mod console;
pub mod desktop;
pub mod testing;

pub use chain::NotifierChain;
pub use console::{ConsoleNotifier, ConsoleProgressBar, ProgressHandle};
pub use desktop::DesktopNotifier;
pub use testing::{DisplayCall, FailingNotifier, RecordingDisplay, RecordingNotifier};
