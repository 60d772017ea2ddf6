use std::path::Path;

use anyhow::{bail, Context, Result};
use dialoguer::{Confirm, Input};
use pomo_core::Config;

#[derive(Debug)]
struct InitAnswers {
    focus_minutes: u64,
    short_break_minutes: u64,
    long_break_minutes: u64,
    focus_rounds: u32,
    desktop_enabled: bool,
    sound_enabled: bool,
}

impl InitAnswers {
    fn into_config(self) -> Config {
        let mut config = Config::default();
        config.session.focus_seconds = self.focus_minutes * 60;
        config.session.short_break_seconds = self.short_break_minutes * 60;
        config.session.long_break_seconds = self.long_break_minutes * 60;
        config.session.focus_rounds = self.focus_rounds;
        config.notifications.desktop_enabled = self.desktop_enabled;
        config.notifications.sound_enabled = self.sound_enabled;
        config
    }
}

pub fn execute(path: Option<&Path>, force: bool) -> Result<()> {
    let config_path = path.map(Path::to_path_buf).unwrap_or_else(Config::config_path);

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite it.",
            config_path.display()
        );
    }

    if force && config_path.exists() {
        println!("⚠️  Overwriting the existing configuration.\n");
    }

    println!("Welcome to Pomo! Let's configure your pomodoro sessions.\n");

    let config = prompt_configuration()?.into_config();
    write_config(&config_path, &config)?;

    println!("\n✅ Configuration saved: {}", config_path.display());
    println!("Run `pomo start` to begin your first session.");

    Ok(())
}

fn prompt_minutes(prompt: &str, default: u64) -> Result<u64> {
    let minutes = Input::new()
        .with_prompt(prompt)
        .default(default)
        .validate_with(|input: &u64| {
            if (1..=480).contains(input) {
                Ok(())
            } else {
                Err("Duration must be between 1 and 480 minutes")
            }
        })
        .interact_text()?;
    Ok(minutes)
}

fn prompt_configuration() -> Result<InitAnswers> {
    let defaults = Config::default().session;

    let focus_minutes = prompt_minutes("Focus period (minutes)", defaults.focus_seconds / 60)?;
    let short_break_minutes =
        prompt_minutes("Short break (minutes)", defaults.short_break_seconds / 60)?;
    let long_break_minutes =
        prompt_minutes("Long break (minutes)", defaults.long_break_seconds / 60)?;

    let focus_rounds: u32 = Input::new()
        .with_prompt("Focus periods per session")
        .default(defaults.focus_rounds)
        .validate_with(|input: &u32| {
            if (1..=12).contains(input) {
                Ok(())
            } else {
                Err("Round count must be between 1 and 12")
            }
        })
        .interact_text()?;

    let desktop_enabled = Confirm::new()
        .with_prompt("Show desktop notifications?")
        .default(true)
        .interact()?;

    let sound_enabled = desktop_enabled
        && Confirm::new()
            .with_prompt("Play sound cues?")
            .default(true)
            .interact()?;

    Ok(InitAnswers {
        focus_minutes,
        short_break_minutes,
        long_break_minutes,
        focus_rounds,
        desktop_enabled,
        sound_enabled,
    })
}

fn write_config(path: &Path, config: &Config) -> Result<()> {
    config
        .save_to(path)
        .with_context(|| format!("Cannot write configuration to {}", path.display()))
}
