mod failing_notifier;
mod recording_display;
mod recording_notifier;

pub use failing_notifier::FailingNotifier;
pub use recording_display::{DisplayCall, RecordingDisplay};
pub use recording_notifier::RecordingNotifier;
