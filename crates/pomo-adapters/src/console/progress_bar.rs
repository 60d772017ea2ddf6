use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use colored::Colorize;
use pomo_core::{DisplayError, ProgressDisplay, ProgressFrame, SessionState};

const DEFAULT_BAR_WIDTH: usize = 30;

struct ActiveBar {
    state: SessionState,
    label: String,
    total: Duration,
}

struct BarState {
    output: Box<dyn Write + Send>,
    active: Option<ActiveBar>,
    closed: bool,
    width: usize,
    colored: bool,
}

/// Single-line terminal progress bar, redrawn in place with `\r`.
///
/// Focus periods are drawn in blue, breaks in magenta.
pub struct ConsoleProgressBar {
    shared: Arc<Mutex<BarState>>,
}

/// Lets another task finalize whatever bar is currently drawn, e.g. on Ctrl-C.
#[derive(Clone)]
pub struct ProgressHandle {
    shared: Arc<Mutex<BarState>>,
}

impl ConsoleProgressBar {
    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()), true)
    }

    pub fn new(output: Box<dyn Write + Send>, colored: bool) -> Self {
        Self {
            shared: Arc::new(Mutex::new(BarState {
                output,
                active: None,
                closed: false,
                width: DEFAULT_BAR_WIDTH,
                colored,
            })),
        }
    }

    pub fn with_width(self, width: usize) -> Self {
        self.shared
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .width = width.max(1);
        self
    }

    pub fn handle(&self) -> ProgressHandle {
        ProgressHandle {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl ProgressHandle {
    pub fn is_active(&self) -> bool {
        self.shared
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .active
            .is_some()
    }

    /// Finalizes the active bar and closes the display: later renders are
    /// ignored.
    pub fn finalize(&self) -> Result<(), DisplayError> {
        let mut state = self
            .shared
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        state.closed = true;
        state.finalize()
    }
}

impl BarState {
    fn draw(&mut self, line: &str, newline: bool) -> Result<(), DisplayError> {
        let ending = if newline { "\n" } else { "" };
        write!(self.output, "\r{}{}", line, ending)
            .and_then(|_| self.output.flush())
            .map_err(|error| DisplayError::Render {
                message: error.to_string(),
            })
    }

    fn paint(&self, state: SessionState, bar: String) -> String {
        if !self.colored {
            return bar;
        }
        if state.is_break() {
            bar.magenta().to_string()
        } else {
            bar.blue().to_string()
        }
    }

    fn finalize(&mut self) -> Result<(), DisplayError> {
        let Some(active) = self.active.take() else {
            return Ok(());
        };

        let bar = self.paint(active.state, bar_cells(1.0, self.width));
        let line = format_line(&active.label, 1.0, &bar, active.total, Duration::ZERO);
        self.draw(&line, true)
    }
}

impl ProgressDisplay for ConsoleProgressBar {
    fn render(&mut self, frame: &ProgressFrame<'_>) -> Result<(), DisplayError> {
        let mut state = self
            .shared
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if state.closed {
            return Ok(());
        }

        let needs_new_bar = state
            .active
            .as_ref()
            .map_or(true, |active| active.state != frame.state || active.label != frame.label);
        if needs_new_bar {
            state.finalize()?;
            state.active = Some(ActiveBar {
                state: frame.state,
                label: frame.label.to_string(),
                total: frame.elapsed + frame.remaining,
            });
        }

        let bar = state.paint(frame.state, bar_cells(frame.fraction, state.width));
        let line = format_line(frame.label, frame.fraction, &bar, frame.elapsed, frame.remaining);
        state.draw(&line, false)
    }

    fn finalize(&mut self) -> Result<(), DisplayError> {
        self.shared
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .finalize()
    }
}

fn bar_cells(fraction: f64, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).floor() as usize).min(width);
    format!("{}{}", "█".repeat(filled), " ".repeat(width - filled))
}

fn format_line(
    label: &str,
    fraction: f64,
    bar: &str,
    elapsed: Duration,
    remaining: Duration,
) -> String {
    format!(
        "{}: {:>3.0}%|{}| {}<{}",
        label,
        fraction.clamp(0.0, 1.0) * 100.0,
        bar,
        format_clock(elapsed),
        format_clock(remaining)
    )
}

fn format_clock(duration: Duration) -> String {
    let total = duration.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}
