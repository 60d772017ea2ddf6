use std::path::{Path, PathBuf};

use anyhow::Result;
use pomo_core::Config;
use serde::Serialize;

#[derive(Serialize)]
struct ConfigOutput<'a> {
    path: PathBuf,
    exists: bool,
    #[serde(flatten)]
    config: &'a Config,
}

pub fn execute(config: &Config, path: Option<&Path>, json: bool) -> Result<()> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(Config::config_path);
    let output = ConfigOutput {
        exists: path.exists(),
        path,
        config,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", format_text(&output));
    }

    Ok(())
}

fn format_text(output: &ConfigOutput<'_>) -> String {
    let session = &output.config.session;
    let notifications = &output.config.notifications;
    let source = if output.exists { "" } else { " (not found, defaults)" };

    format!(
        "Configuration: {}{}\n\
         \n\
         Session\n\
         \x20  Focus:        {}\n\
         \x20  Short break:  {}\n\
         \x20  Long break:   {}\n\
         \x20  Focus rounds: {}\n\
         \n\
         Notifications\n\
         \x20  Desktop:      {}\n\
         \x20  Sound:        {}\n\
         \x20  Urgency:      {}\n",
        output.path.display(),
        source,
        format_seconds(session.focus_seconds),
        format_seconds(session.short_break_seconds),
        format_seconds(session.long_break_seconds),
        session.focus_rounds,
        on_off(notifications.desktop_enabled),
        on_off(notifications.sound_enabled),
        notifications.urgency.as_str(),
    )
}

fn format_seconds(seconds: u64) -> String {
    let minutes = seconds / 60;
    let remaining_seconds = seconds % 60;

    match (minutes, remaining_seconds) {
        (0, seconds) => format!("{} sec", seconds),
        (minutes, 0) => format!("{} min", minutes),
        (minutes, seconds) => format!("{} min {} sec", minutes, seconds),
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}
