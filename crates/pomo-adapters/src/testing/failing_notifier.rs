use pomo_core::{Event, Notifier, NotifyError};

/// Notifier that fails every call with a fixed kind of error.
pub struct FailingNotifier {
    kind: FailureKind,
}

#[derive(Clone, Copy)]
enum FailureKind {
    BrokenConsole,
    MissingSound,
    DesktopUnavailable,
}

impl FailingNotifier {
    pub fn broken_console() -> Self {
        Self {
            kind: FailureKind::BrokenConsole,
        }
    }

    pub fn missing_sound() -> Self {
        Self {
            kind: FailureKind::MissingSound,
        }
    }

    pub fn desktop_unavailable() -> Self {
        Self {
            kind: FailureKind::DesktopUnavailable,
        }
    }
}

impl Notifier for FailingNotifier {
    fn notify(&self, event: &Event) -> Result<(), NotifyError> {
        Err(match self.kind {
            FailureKind::BrokenConsole => NotifyError::Output {
                message: "broken pipe".to_string(),
            },
            FailureKind::MissingSound => NotifyError::Sound {
                cue: event
                    .sound_cue()
                    .map(|cue| cue.file_name().to_string())
                    .unwrap_or_default(),
                message: "no such file".to_string(),
            },
            FailureKind::DesktopUnavailable => NotifyError::Desktop {
                message: "no notification server".to_string(),
            },
        })
    }
}
