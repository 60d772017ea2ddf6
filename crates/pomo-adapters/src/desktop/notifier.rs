use notify_rust::{Notification, Urgency};
use pomo_core::{Event, NotificationUrgency, Notifier, NotifyError, SoundCue};
use tracing::debug;

const APP_NAME: &str = "Pomo";

/// Raises a desktop notification per event and lets the notification server
/// play the event's sound cue.
///
/// Cues are sent as freedesktop sound theme names (`sound_name` hint), so they
/// are only heard when the server honours that hint. The `.wav` files are never
/// played by pomo itself, and `--no-desktop` silences sound as well.
pub struct DesktopNotifier {
    urgency: Urgency,
    sound_enabled: bool,
}

impl DesktopNotifier {
    pub fn new(urgency: NotificationUrgency, sound_enabled: bool) -> Self {
        let urgency = match urgency {
            NotificationUrgency::Low => Urgency::Low,
            NotificationUrgency::Normal => Urgency::Normal,
            NotificationUrgency::Critical => Urgency::Critical,
        };

        Self {
            urgency,
            sound_enabled,
        }
    }

    fn build_notification(&self, event: &Event) -> Notification {
        let mut notification = Notification::new();
        notification
            .summary(APP_NAME)
            .body(event.message())
            .urgency(self.urgency)
            .appname(APP_NAME);

        if let Some(cue) = self.sound_for(event) {
            notification.sound_name(sound_theme_name(cue));
        }

        notification
    }

    fn sound_for(&self, event: &Event) -> Option<SoundCue> {
        if self.sound_enabled {
            event.sound_cue()
        } else {
            None
        }
    }
}

/// Maps a cue to a freedesktop sound theme name.
fn sound_theme_name(cue: SoundCue) -> &'static str {
    match cue {
        SoundCue::SessionStart => "service-login",
        SoundCue::FocusStart => "message-new-instant",
        SoundCue::BreakStart => "bell",
        SoundCue::LongBreakStart => "complete",
        SoundCue::SessionEnd => "alarm-clock-elapsed",
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, event: &Event) -> Result<(), NotifyError> {
        match self.build_notification(event).show() {
            Ok(_) => {
                debug!(
                    event = event.message(),
                    cue = ?self.sound_for(event),
                    "desktop notification sent"
                );
                Ok(())
            }
            Err(error) => {
                let message = error.to_string();
                match self.sound_for(event) {
                    Some(cue) => Err(NotifyError::Sound {
                        cue: cue.file_name().to_string(),
                        message,
                    }),
                    None => Err(NotifyError::Desktop { message }),
                }
            }
        }
    }
}
