use pomo_core::{DisplayError, ProgressDisplay, ProgressFrame, SessionState};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum DisplayCall {
    Render {
        state: SessionState,
        label: String,
        fraction: f64,
        elapsed: Duration,
        remaining: Duration,
    },
    Finalize,
}

/// Progress display that logs every call. Clones share the same log.
#[derive(Clone, Default)]
pub struct RecordingDisplay {
    calls: Arc<Mutex<Vec<DisplayCall>>>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<DisplayCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn finalize_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| matches!(call, DisplayCall::Finalize))
            .count()
    }
}

impl ProgressDisplay for RecordingDisplay {
    fn render(&mut self, frame: &ProgressFrame<'_>) -> Result<(), DisplayError> {
        self.calls.lock().unwrap().push(DisplayCall::Render {
            state: frame.state,
            label: frame.label.to_string(),
            fraction: frame.fraction,
            elapsed: frame.elapsed,
            remaining: frame.remaining,
        });
        Ok(())
    }

    fn finalize(&mut self) -> Result<(), DisplayError> {
        self.calls.lock().unwrap().push(DisplayCall::Finalize);
        Ok(())
    }
}
