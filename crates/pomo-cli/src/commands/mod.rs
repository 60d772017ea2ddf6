mod config;
mod init;
mod start;

use std::path::Path;

use anyhow::{Context, Result};
use pomo_core::Config;

pub use config::execute as config;
pub use init::execute as init;
pub use start::{execute as start, StartArgs};

/// Loads the explicit file when one is given, otherwise the user config
/// (defaults when it does not exist yet).
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("cannot load configuration from {}", path.display())),
        None => Config::load().with_context(|| {
            format!(
                "cannot load configuration from {}",
                Config::config_path().display()
            )
        }),
    }
}
