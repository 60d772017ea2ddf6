use super::SessionState;

/// Audio cue attached to an event, identified by its sound file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    SessionStart,
    FocusStart,
    BreakStart,
    LongBreakStart,
    SessionEnd,
}

impl SoundCue {
    pub fn file_name(&self) -> &'static str {
        match self {
            SoundCue::SessionStart => "session_start.wav",
            SoundCue::FocusStart => "focus_start.wav",
            SoundCue::BreakStart => "break_start.wav",
            SoundCue::LongBreakStart => "long_break_start.wav",
            SoundCue::SessionEnd => "session_end.wav",
        }
    }
}

impl std::fmt::Display for SoundCue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.file_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    PeriodStarted { state: SessionState, round: u32 },
    SessionCompleted { focus_rounds: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    kind: EventKind,
    message: String,
    sound_cue: Option<SoundCue>,
}

impl Event {
    /// Event emitted when a period begins. `round` is the focus round the
    /// period belongs to; the first focus round announces the session itself.
    pub fn period_started(state: SessionState, round: u32) -> Self {
        let (message, sound_cue) = match state {
            SessionState::Focus if round <= 1 => {
                ("Pomodoro session started.", SoundCue::SessionStart)
            }
            SessionState::Focus => ("Starting focus period.", SoundCue::FocusStart),
            SessionState::ShortBreak => ("Starting short break.", SoundCue::BreakStart),
            SessionState::LongBreak => ("Starting long break.", SoundCue::LongBreakStart),
            SessionState::Finished => {
                panic!("finished is not a period; use Event::session_completed")
            }
        };

        Self {
            kind: EventKind::PeriodStarted { state, round },
            message: message.to_string(),
            sound_cue: Some(sound_cue),
        }
    }

    pub fn session_completed(focus_rounds: u32) -> Self {
        Self {
            kind: EventKind::SessionCompleted { focus_rounds },
            message: "Pomodoro session completed.".to_string(),
            sound_cue: Some(SoundCue::SessionEnd),
        }
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn sound_cue(&self) -> Option<SoundCue> {
        self.sound_cue
    }

    pub fn is_completion(&self) -> bool {
        matches!(self.kind, EventKind::SessionCompleted { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_focus_round_announces_session_start() {
        let event = Event::period_started(SessionState::Focus, 1);

        assert_eq!(event.message(), "Pomodoro session started.");
        assert_eq!(event.sound_cue(), Some(SoundCue::SessionStart));
    }

    #[test]
    fn later_focus_rounds_announce_focus_period() {
        let event = Event::period_started(SessionState::Focus, 3);

        assert_eq!(event.message(), "Starting focus period.");
        assert_eq!(event.sound_cue(), Some(SoundCue::FocusStart));
        assert_eq!(
            event.kind(),
            EventKind::PeriodStarted {
                state: SessionState::Focus,
                round: 3
            }
        );
    }

    #[test]
    fn breaks_use_their_own_cues() {
        let short = Event::period_started(SessionState::ShortBreak, 2);
        let long = Event::period_started(SessionState::LongBreak, 4);

        assert_eq!(short.message(), "Starting short break.");
        assert_eq!(short.sound_cue().map(|cue| cue.file_name()), Some("break_start.wav"));
        assert_eq!(long.message(), "Starting long break.");
        assert_eq!(
            long.sound_cue().map(|cue| cue.file_name()),
            Some("long_break_start.wav")
        );
    }

    #[test]
    fn completion_event_carries_round_count() {
        let event = Event::session_completed(5);

        assert!(event.is_completion());
        assert_eq!(event.message(), "Pomodoro session completed.");
        assert_eq!(event.sound_cue(), Some(SoundCue::SessionEnd));
        assert_eq!(event.kind(), EventKind::SessionCompleted { focus_rounds: 5 });
    }

    #[test]
    #[should_panic]
    fn finished_is_not_a_period() {
        Event::period_started(SessionState::Finished, 5);
    }
}
