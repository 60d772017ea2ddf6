use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Focus,
    ShortBreak,
    LongBreak,
    Finished,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Focus => "focus",
            SessionState::ShortBreak => "short_break",
            SessionState::LongBreak => "long_break",
            SessionState::Finished => "finished",
        }
    }

    /// Label shown next to the progress bar.
    pub fn label(&self) -> &'static str {
        match self {
            SessionState::Focus => "Focus Period",
            SessionState::ShortBreak => "Short Break",
            SessionState::LongBreak => "Long Break",
            SessionState::Finished => "Session Finished",
        }
    }

    pub fn is_break(&self) -> bool {
        matches!(self, SessionState::ShortBreak | SessionState::LongBreak)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Finished)
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
