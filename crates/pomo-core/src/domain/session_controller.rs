use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info, warn};

use super::{Event, SessionState, Timer, TimerError};
use crate::config::{ConfigError, SessionConfig};
use crate::ports::{Clock, Notifier, ProgressDisplay, ProgressFrame};

/// Wait between two progress checks of the active timer.
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("invalid session configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("timer failure: {0}")]
    Timer(#[from] TimerError),
}

/// What a session went through, in order. Ends with `Finished` once the
/// last focus round is done.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionSummary {
    pub visited: Vec<SessionState>,
    pub focus_rounds: u32,
    pub short_breaks: u32,
    pub long_breaks: u32,
}

/// Transition table, evaluated once the period in `current` has run out.
///
/// `completed_focus_rounds` counts focus periods started so far, including
/// the one that just ended.
pub fn next_state(
    current: SessionState,
    completed_focus_rounds: u32,
    total_focus_rounds: u32,
) -> SessionState {
    match current {
        SessionState::Focus => {
            assert!(
                (1..=total_focus_rounds).contains(&completed_focus_rounds),
                "focus round counter {completed_focus_rounds} outside 1..={total_focus_rounds}"
            );
            if completed_focus_rounds == total_focus_rounds {
                SessionState::Finished
            } else if completed_focus_rounds + 1 == total_focus_rounds {
                SessionState::LongBreak
            } else {
                SessionState::ShortBreak
            }
        }
        SessionState::ShortBreak | SessionState::LongBreak => SessionState::Focus,
        SessionState::Finished => SessionState::Finished,
    }
}

pub struct SessionController {
    config: SessionConfig,
    clock: Arc<dyn Clock>,
    notifier: Box<dyn Notifier>,
    display: Box<dyn ProgressDisplay>,
    state: SessionState,
    completed_focus_rounds: u32,
    visited: Vec<SessionState>,
}

impl SessionController {
    pub fn new(
        config: SessionConfig,
        clock: Arc<dyn Clock>,
        notifier: Box<dyn Notifier>,
        display: Box<dyn ProgressDisplay>,
    ) -> Result<Self, SessionError> {
        config.validate()?;

        Ok(Self {
            config,
            clock,
            notifier,
            display,
            state: SessionState::Focus,
            completed_focus_rounds: 0,
            visited: Vec::new(),
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn completed_focus_rounds(&self) -> u32 {
        self.completed_focus_rounds
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_terminal()
    }

    /// Runs every remaining period until the session reaches `Finished`.
    pub fn run(&mut self) -> Result<SessionSummary, SessionError> {
        info!(
            focus_seconds = self.config.focus_seconds,
            short_break_seconds = self.config.short_break_seconds,
            long_break_seconds = self.config.long_break_seconds,
            focus_rounds = self.config.focus_rounds,
            "session started"
        );

        while !self.state.is_terminal() {
            self.run_period()?;
        }

        Ok(self.summary())
    }

    /// Runs the active period to completion, then moves to the next state.
    ///
    /// Panics when called after the session finished.
    pub fn run_period(&mut self) -> Result<SessionState, SessionError> {
        let period = self.state;
        let Some(target) = self.config.duration_for(period) else {
            panic!("session already finished, no period left to run");
        };

        if period == SessionState::Focus {
            self.completed_focus_rounds += 1;
        }

        let mut timer = Timer::new(target, Arc::clone(&self.clock));
        self.visited.push(period);
        self.notify(&Event::period_started(period, self.completed_focus_rounds));

        timer.start()?;
        info!(
            state = %period,
            round = self.completed_focus_rounds,
            target_seconds = target.as_secs(),
            "period started"
        );

        {
            let mut progress = ProgressGuard::new(self.display.as_mut());
            loop {
                let frame = ProgressFrame {
                    state: period,
                    label: period.label(),
                    fraction: timer.progress_fraction()?,
                    elapsed: timer.elapsed()?.min(target),
                    remaining: timer.remaining()?,
                };
                progress.render(&frame);

                if timer.is_finished()? {
                    break;
                }
                self.clock.sleep(POLL_INTERVAL);
            }
        }
        timer.stop();

        let next = next_state(period, self.completed_focus_rounds, self.config.focus_rounds);
        debug!(from = %period, to = %next, round = self.completed_focus_rounds, "transition");
        self.state = next;

        if next.is_terminal() {
            self.visited.push(SessionState::Finished);
            self.notify(&Event::session_completed(self.completed_focus_rounds));
            info!(focus_rounds = self.completed_focus_rounds, "session completed");
        }

        Ok(next)
    }

    pub fn summary(&self) -> SessionSummary {
        let count = |wanted: SessionState| {
            self.visited.iter().filter(|state| **state == wanted).count() as u32
        };

        SessionSummary {
            visited: self.visited.clone(),
            focus_rounds: self.completed_focus_rounds,
            short_breaks: count(SessionState::ShortBreak),
            long_breaks: count(SessionState::LongBreak),
        }
    }

    fn notify(&self, event: &Event) {
        match self.notifier.notify(event) {
            Ok(()) => debug!(event = event.message(), "event delivered"),
            Err(error) => warn!(%error, event = event.message(), "notification failed"),
        }
    }
}

/// Keeps the progress display acquired for one period and finalizes it when
/// dropped, whether the period ran out or bailed with an error.
struct ProgressGuard<'a> {
    display: &'a mut dyn ProgressDisplay,
    render_failed: bool,
}

impl<'a> ProgressGuard<'a> {
    fn new(display: &'a mut dyn ProgressDisplay) -> Self {
        Self {
            display,
            render_failed: false,
        }
    }

    fn render(&mut self, frame: &ProgressFrame<'_>) {
        if let Err(error) = self.display.render(frame) {
            if self.render_failed {
                debug!(%error, "progress refresh failed again");
            } else {
                warn!(%error, "progress refresh failed");
                self.render_failed = true;
            }
        }
    }
}

impl Drop for ProgressGuard<'_> {
    fn drop(&mut self) {
        if let Err(error) = self.display.finalize() {
            warn!(%error, "progress display could not be finalized");
        }
    }
}
