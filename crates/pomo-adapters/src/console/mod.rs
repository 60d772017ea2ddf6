mod notifier;
mod progress_bar;

pub use notifier::ConsoleNotifier;
pub use progress_bar::{ConsoleProgressBar, ProgressHandle};
