use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::domain::SessionState;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("configuration file not found: {path}")]
    NotFound { path: String },

    #[error("read error: {source}")]
    Read {
        #[from]
        source: std::io::Error,
    },

    #[error("TOML parse error: {source}")]
    Parse {
        #[from]
        source: toml::de::Error,
    },

    #[error("TOML serialization error: {source}")]
    Serialize {
        #[from]
        source: toml::ser::Error,
    },

    #[error("invalid value for {field}: must be greater than zero")]
    Invalid { field: &'static str },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub session: SessionConfig,
    pub notifications: NotificationConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub focus_seconds: u64,
    pub short_break_seconds: u64,
    pub long_break_seconds: u64,
    pub focus_rounds: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub sound_enabled: bool,
    pub desktop_enabled: bool,
    pub urgency: NotificationUrgency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationUrgency {
    Low,
    #[default]
    Normal,
    Critical,
}

impl NotificationUrgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationUrgency::Low => "low",
            NotificationUrgency::Normal => "normal",
            NotificationUrgency::Critical => "critical",
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            focus_seconds: 1500,
            short_break_seconds: 300,
            long_break_seconds: 600,
            focus_rounds: 5,
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            desktop_enabled: true,
            urgency: NotificationUrgency::Normal,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.focus_seconds == 0 {
            return Err(ConfigError::Invalid {
                field: "focus_seconds",
            });
        }
        if self.short_break_seconds == 0 {
            return Err(ConfigError::Invalid {
                field: "short_break_seconds",
            });
        }
        if self.long_break_seconds == 0 {
            return Err(ConfigError::Invalid {
                field: "long_break_seconds",
            });
        }
        if self.focus_rounds == 0 {
            return Err(ConfigError::Invalid {
                field: "focus_rounds",
            });
        }
        Ok(())
    }

    /// Target length of a period. `None` for the terminal state.
    pub fn duration_for(&self, state: SessionState) -> Option<Duration> {
        let seconds = match state {
            SessionState::Focus => self.focus_seconds,
            SessionState::ShortBreak => self.short_break_seconds,
            SessionState::LongBreak => self.long_break_seconds,
            SessionState::Finished => return None,
        };
        Some(Duration::from_secs(seconds))
    }
}

impl Config {
    /// Loads the user configuration, falling back to defaults when no file
    /// exists yet.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.session.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pomo")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_classic_pomodoro_values() {
        let config = Config::default();

        assert_eq!(config.session.focus_seconds, 1500);
        assert_eq!(config.session.short_break_seconds, 300);
        assert_eq!(config.session.long_break_seconds, 600);
        assert_eq!(config.session.focus_rounds, 5);
        assert!(config.notifications.sound_enabled);
        assert!(config.notifications.desktop_enabled);
        assert_eq!(config.notifications.urgency, NotificationUrgency::Normal);
    }

    #[test]
    fn urgency_names_match_file_values() {
        for urgency in [
            NotificationUrgency::Low,
            NotificationUrgency::Normal,
            NotificationUrgency::Critical,
        ] {
            let notifications = NotificationConfig {
                urgency,
                ..NotificationConfig::default()
            };
            let written = toml::to_string(&notifications).unwrap();

            assert!(written.contains(&format!("urgency = \"{}\"", urgency.as_str())));
        }
    }

    #[test]
    fn parse_minimal_config() {
        let toml = r#"
            [session]
            focus_seconds = 3000
        "#;

        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.session.focus_seconds, 3000);
        assert_eq!(config.session.short_break_seconds, 300);
        assert_eq!(config.session.focus_rounds, 5);
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
            [session]
            focus_seconds = 2700
            short_break_seconds = 600
            long_break_seconds = 1800
            focus_rounds = 3

            [notifications]
            sound_enabled = false
            desktop_enabled = false
            urgency = "critical"
        "#;

        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.session.focus_seconds, 2700);
        assert_eq!(config.session.short_break_seconds, 600);
        assert_eq!(config.session.long_break_seconds, 1800);
        assert_eq!(config.session.focus_rounds, 3);
        assert!(!config.notifications.sound_enabled);
        assert!(!config.notifications.desktop_enabled);
        assert_eq!(config.notifications.urgency, NotificationUrgency::Critical);
    }

    #[test]
    fn validate_rejects_zero_values() {
        let zero_focus = SessionConfig {
            focus_seconds: 0,
            ..SessionConfig::default()
        };
        let zero_rounds = SessionConfig {
            focus_rounds: 0,
            ..SessionConfig::default()
        };

        assert!(matches!(
            zero_focus.validate(),
            Err(ConfigError::Invalid {
                field: "focus_seconds"
            })
        ));
        assert!(matches!(
            zero_rounds.validate(),
            Err(ConfigError::Invalid {
                field: "focus_rounds"
            })
        ));
        assert!(SessionConfig::default().validate().is_ok());
    }

    #[test]
    fn duration_for_maps_each_period() {
        let config = SessionConfig::default();

        assert_eq!(
            config.duration_for(SessionState::Focus),
            Some(Duration::from_secs(1500))
        );
        assert_eq!(
            config.duration_for(SessionState::ShortBreak),
            Some(Duration::from_secs(300))
        );
        assert_eq!(
            config.duration_for(SessionState::LongBreak),
            Some(Duration::from_secs(600))
        );
        assert_eq!(config.duration_for(SessionState::Finished), None);
    }

    #[test]
    fn load_from_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::NotFound { .. })
        ));
    }

    #[test]
    fn load_from_rejects_invalid_durations() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[session]\nshort_break_seconds = 0\n").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::Invalid {
                field: "short_break_seconds"
            })
        ));
    }

    #[test]
    fn saved_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.session.focus_seconds = 1200;
        config.notifications.urgency = NotificationUrgency::Low;

        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();

        assert_eq!(loaded, config);
    }
}
