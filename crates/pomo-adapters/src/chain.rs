use pomo_core::{Event, Notifier, NotifyError};
use tracing::debug;

/// Forwards each event to every notifier in order.
///
/// A failing notifier does not stop the ones after it; the first error is
/// returned once all of them have run.
#[derive(Default)]
pub struct NotifierChain {
    notifiers: Vec<Box<dyn Notifier>>,
}

impl NotifierChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifiers.push(Box::new(notifier));
        self
    }

    pub fn len(&self) -> usize {
        self.notifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }
}

impl Notifier for NotifierChain {
    fn notify(&self, event: &Event) -> Result<(), NotifyError> {
        let mut first_error = None;

        for notifier in &self.notifiers {
            if let Err(error) = notifier.notify(event) {
                debug!(%error, "notifier in chain failed");
                first_error.get_or_insert(error);
            }
        }

        match first_error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FailingNotifier, RecordingNotifier};

    #[test]
    fn empty_chain_accepts_events() {
        let chain = NotifierChain::new();

        assert!(chain.is_empty());
        assert!(chain.notify(&Event::session_completed(5)).is_ok());
    }

    #[test]
    fn failure_does_not_starve_later_notifiers() {
        let recorder = RecordingNotifier::new();
        let chain = NotifierChain::new()
            .with(FailingNotifier::missing_sound())
            .with(recorder.clone());

        let result = chain.notify(&Event::session_completed(5));

        assert_eq!(chain.len(), 2);
        assert!(matches!(result, Err(NotifyError::Sound { .. })));
        assert_eq!(recorder.events().len(), 1);
    }

    #[test]
    fn first_error_wins() {
        let chain = NotifierChain::new()
            .with(FailingNotifier::broken_console())
            .with(FailingNotifier::missing_sound());

        let result = chain.notify(&Event::session_completed(5));

        assert!(matches!(result, Err(NotifyError::Output { .. })));
    }
}
