use std::sync::Arc;
use std::time::{Duration, Instant};

use thiserror::Error;

use crate::ports::Clock;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TimerError {
    #[error("timer queried before it was started")]
    NotStarted,

    #[error("timer already started; timers are single-use")]
    AlreadyStarted,
}

/// Tracks elapsed monotonic time against a fixed target for one period.
///
/// A timer is started once, polled, then dropped. The controller builds a
/// fresh one for every period instead of resetting an old one.
pub struct Timer {
    target: Duration,
    clock: Arc<dyn Clock>,
    started_at: Option<Instant>,
    running: bool,
}

impl Timer {
    pub fn new(target: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            target,
            clock,
            started_at: None,
            running: false,
        }
    }

    pub fn start(&mut self) -> Result<(), TimerError> {
        if self.started_at.is_some() {
            return Err(TimerError::AlreadyStarted);
        }
        self.started_at = Some(self.clock.now());
        self.running = true;
        Ok(())
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn target(&self) -> Duration {
        self.target
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn elapsed(&self) -> Result<Duration, TimerError> {
        let started_at = self.started_at.ok_or(TimerError::NotStarted)?;
        Ok(self.clock.now().saturating_duration_since(started_at))
    }

    pub fn is_finished(&self) -> Result<bool, TimerError> {
        Ok(self.elapsed()? >= self.target)
    }

    pub fn remaining(&self) -> Result<Duration, TimerError> {
        Ok(self.target.saturating_sub(self.elapsed()?))
    }

    pub fn progress_fraction(&self) -> Result<f64, TimerError> {
        let elapsed = self.elapsed()?;
        if self.target.is_zero() {
            return Ok(1.0);
        }
        let clamped = elapsed.min(self.target);
        Ok(clamped.as_secs_f64() / self.target.as_secs_f64())
    }
}

impl std::fmt::Debug for Timer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Timer")
            .field("target", &self.target)
            .field("started_at", &self.started_at)
            .field("running", &self.running)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ManualClock;

    fn create_timer(seconds: u64) -> (Timer, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new());
        let timer = Timer::new(Duration::from_secs(seconds), clock.clone());
        (timer, clock)
    }

    #[test]
    fn unstarted_timer_reports_not_started() {
        let (timer, _clock) = create_timer(10);

        assert_eq!(timer.elapsed(), Err(TimerError::NotStarted));
        assert_eq!(timer.is_finished(), Err(TimerError::NotStarted));
        assert_eq!(timer.progress_fraction(), Err(TimerError::NotStarted));
        assert!(!timer.is_running());
    }

    #[test]
    fn start_marks_timer_running() {
        let (mut timer, _clock) = create_timer(10);

        timer.start().unwrap();

        assert!(timer.is_running());
        assert_eq!(timer.elapsed().unwrap(), Duration::ZERO);
    }

    #[test]
    fn second_start_is_rejected() {
        let (mut timer, clock) = create_timer(10);
        timer.start().unwrap();
        clock.advance(Duration::from_secs(4));

        assert_eq!(timer.start(), Err(TimerError::AlreadyStarted));
        assert_eq!(timer.elapsed().unwrap(), Duration::from_secs(4));
    }

    #[test]
    fn finishes_exactly_at_target() {
        for seconds in [1, 2, 300, 1500] {
            let (mut timer, clock) = create_timer(seconds);
            timer.start().unwrap();

            clock.advance(Duration::from_secs(seconds) - Duration::from_millis(1));
            assert!(!timer.is_finished().unwrap(), "finished early for {seconds}s");

            clock.advance(Duration::from_millis(1));
            assert!(timer.is_finished().unwrap(), "not finished at {seconds}s");
        }
    }

    #[test]
    fn progress_is_bounded_and_non_decreasing() {
        let (mut timer, clock) = create_timer(5);
        timer.start().unwrap();

        let mut previous = timer.progress_fraction().unwrap();
        assert_eq!(previous, 0.0);

        for step_millis in [0, 300, 700, 1000, 2500, 4000, 9000] {
            clock.advance(Duration::from_millis(step_millis));
            let fraction = timer.progress_fraction().unwrap();
            assert!((0.0..=1.0).contains(&fraction));
            assert!(fraction >= previous);
            previous = fraction;
        }

        assert_eq!(previous, 1.0);
    }

    #[test]
    fn overrun_keeps_reporting_completion() {
        let (mut timer, clock) = create_timer(2);
        timer.start().unwrap();
        clock.advance(Duration::from_secs(7));

        assert!(timer.is_finished().unwrap());
        assert!(timer.elapsed().unwrap() >= timer.target());
        assert_eq!(timer.progress_fraction().unwrap(), 1.0);
        assert_eq!(timer.remaining().unwrap(), Duration::ZERO);
    }

    #[test]
    fn remaining_counts_down() {
        let (mut timer, clock) = create_timer(10);
        timer.start().unwrap();
        clock.advance(Duration::from_secs(3));

        assert_eq!(timer.remaining().unwrap(), Duration::from_secs(7));
    }

    #[test]
    fn zero_target_is_immediately_complete() {
        let (mut timer, _clock) = create_timer(0);
        timer.start().unwrap();

        assert!(timer.is_finished().unwrap());
        assert_eq!(timer.progress_fraction().unwrap(), 1.0);
    }

    #[test]
    fn stop_clears_running_flag_but_keeps_elapsed() {
        let (mut timer, clock) = create_timer(10);
        timer.start().unwrap();
        clock.advance(Duration::from_secs(2));

        timer.stop();

        assert!(!timer.is_running());
        assert_eq!(timer.elapsed().unwrap(), Duration::from_secs(2));
    }
}
