use std::io::{self, Write};
use std::sync::Mutex;

use chrono::{DateTime, Local};
use pomo_core::{Event, Notifier, NotifyError};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Prints each event as `YYYY-MM-DD HH:MM:SS: <message>`.
pub struct ConsoleNotifier<W: Write + Send = io::Stdout> {
    output: Mutex<W>,
}

impl ConsoleNotifier<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleNotifier<W> {
    pub fn new(output: W) -> Self {
        Self {
            output: Mutex::new(output),
        }
    }

    pub fn into_inner(self) -> W {
        self.output
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

pub(crate) fn format_line(timestamp: DateTime<Local>, message: &str) -> String {
    format!("{}: {}", timestamp.format(TIMESTAMP_FORMAT), message)
}

impl<W: Write + Send> Notifier for ConsoleNotifier<W> {
    fn notify(&self, event: &Event) -> Result<(), NotifyError> {
        let line = format_line(Local::now(), event.message());
        let mut output = self
            .output
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        writeln!(output, "{}", line)
            .and_then(|_| output.flush())
            .map_err(|error| NotifyError::Output {
                message: error.to_string(),
            })
    }
}
