mod clock;
mod notifier;
mod progress_display;

pub use clock::{Clock, ManualClock, SystemClock};
pub use notifier::{Notifier, NotifyError};
pub use progress_display::{DisplayError, ProgressDisplay, ProgressFrame};
