use pomo_core::{Event, EventKind, Notifier, NotifyError, SessionState};
use std::sync::{Arc, Mutex};

/// Keeps every event it receives. Clones share the same log.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    events: Arc<Mutex<Vec<Event>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .map(|event| event.message().to_string())
            .collect()
    }

    /// States announced by period events, in order.
    pub fn announced_states(&self) -> Vec<SessionState> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|event| match event.kind() {
                EventKind::PeriodStarted { state, .. } => Some(state),
                EventKind::SessionCompleted { .. } => None,
            })
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, event: &Event) -> Result<(), NotifyError> {
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }
}
