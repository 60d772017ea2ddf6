mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::StartArgs;

const DEFAULT_LOG_FILTER: &str = "pomo_core=warn,pomo_adapters=warn,pomo_cli=warn";

#[derive(Parser)]
#[command(name = "pomo")]
#[command(about = "Pomo - Pomodoro focus sessions in your terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Read settings from this file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a full pomodoro session (default)
    Start(StartArgs),
    /// Show the effective configuration
    Config {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write a configuration file interactively
    Init {
        /// Overwrite an existing configuration
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command.unwrap_or(Commands::Start(StartArgs::default())) {
        Commands::Start(args) => {
            let config = commands::load_config(config_path)?;
            commands::start(config, args).await
        }
        Commands::Config { json } => {
            let config = commands::load_config(config_path)?;
            commands::config(&config, config_path, json)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Init { force } => {
            commands::init(config_path, force)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_start() {
        let cli = Cli::try_parse_from(["pomo"]).unwrap();

        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn start_accepts_duration_overrides() {
        let cli = Cli::try_parse_from([
            "pomo",
            "start",
            "--focus",
            "2",
            "--short-break",
            "1",
            "--long-break",
            "1",
            "--rounds",
            "3",
            "--no-sound",
        ])
        .unwrap();

        let Some(Commands::Start(args)) = cli.command else {
            panic!("expected start command");
        };
        assert_eq!(args.focus, Some(2));
        assert_eq!(args.short_break, Some(1));
        assert_eq!(args.long_break, Some(1));
        assert_eq!(args.rounds, Some(3));
        assert!(args.no_sound);
        assert!(!args.no_desktop);
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::try_parse_from(["pomo", "config", "--json", "--config", "/tmp/pomo.toml"])
            .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("/tmp/pomo.toml")));
        assert!(matches!(cli.command, Some(Commands::Config { json: true })));
    }
}
