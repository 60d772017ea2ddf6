use std::future::Future;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use pomo_adapters::{
    ConsoleNotifier, ConsoleProgressBar, DesktopNotifier, NotifierChain, ProgressHandle,
};
use pomo_core::{
    Config, NotificationConfig, SessionController, SessionError, SessionSummary, SystemClock,
};
use tracing::{info, warn};

const INTERRUPTED_EXIT_CODE: u8 = 130;

#[derive(Args, Debug, Default)]
pub struct StartArgs {
    /// Focus period length in seconds
    #[arg(long, value_name = "SECONDS")]
    pub focus: Option<u64>,

    /// Short break length in seconds
    #[arg(long, value_name = "SECONDS")]
    pub short_break: Option<u64>,

    /// Long break length in seconds
    #[arg(long, value_name = "SECONDS")]
    pub long_break: Option<u64>,

    /// Focus periods per session
    #[arg(long, value_name = "COUNT")]
    pub rounds: Option<u32>,

    /// Do not play sound cues
    #[arg(long)]
    pub no_sound: bool,

    /// Do not raise desktop notifications
    #[arg(long)]
    pub no_desktop: bool,
}

impl StartArgs {
    fn apply(&self, mut config: Config) -> Config {
        if let Some(seconds) = self.focus {
            config.session.focus_seconds = seconds;
        }
        if let Some(seconds) = self.short_break {
            config.session.short_break_seconds = seconds;
        }
        if let Some(seconds) = self.long_break {
            config.session.long_break_seconds = seconds;
        }
        if let Some(rounds) = self.rounds {
            config.session.focus_rounds = rounds;
        }
        if self.no_sound {
            config.notifications.sound_enabled = false;
        }
        if self.no_desktop {
            config.notifications.desktop_enabled = false;
        }
        config
    }
}

#[derive(Debug)]
pub enum Outcome {
    Completed(SessionSummary),
    Interrupted,
}

pub async fn execute(config: Config, args: StartArgs) -> Result<ExitCode> {
    let config = args.apply(config);

    let progress = ConsoleProgressBar::stdout();
    let progress_handle = progress.handle();
    let controller = SessionController::new(
        config.session,
        Arc::new(SystemClock),
        Box::new(build_notifier(&config.notifications)),
        Box::new(progress),
    )
    .context("cannot start session")?;

    match run_until_interrupted(controller, tokio::signal::ctrl_c()).await? {
        Outcome::Completed(summary) => {
            info!(
                focus_rounds = summary.focus_rounds,
                short_breaks = summary.short_breaks,
                long_breaks = summary.long_breaks,
                "session finished"
            );
            Ok(ExitCode::SUCCESS)
        }
        Outcome::Interrupted => {
            close_progress(&progress_handle);
            eprintln!("Session interrupted.");
            // the blocking session task cannot be cancelled; leave without waiting for it
            std::process::exit(i32::from(INTERRUPTED_EXIT_CODE));
        }
    }
}

/// Flushes the bar of the interrupted period and stops any further redraw.
fn close_progress(progress: &ProgressHandle) {
    if let Err(error) = progress.finalize() {
        warn!(%error, "progress display could not be finalized");
    }
}

/// Runs the session on the blocking pool and races it against `interrupt`.
///
/// When the interrupt listener itself fails, the session keeps running and
/// its result is awaited.
pub async fn run_until_interrupted<F>(
    mut controller: SessionController,
    interrupt: F,
) -> Result<Outcome>
where
    F: Future<Output = std::io::Result<()>>,
{
    let mut session = tokio::task::spawn_blocking(move || controller.run());

    tokio::select! {
        result = &mut session => completed(result),
        signal = interrupt => match signal {
            Ok(()) => {
                info!("interrupt received, stopping session");
                Ok(Outcome::Interrupted)
            }
            Err(error) => {
                warn!(%error, "cannot listen for Ctrl-C, session cannot be interrupted");
                completed(session.await)
            }
        },
    }
}

fn completed(
    result: std::result::Result<
        std::result::Result<SessionSummary, SessionError>,
        tokio::task::JoinError,
    >,
) -> Result<Outcome> {
    let summary = result.context("session task panicked")??;
    Ok(Outcome::Completed(summary))
}

fn build_notifier(notifications: &NotificationConfig) -> NotifierChain {
    let chain = NotifierChain::new().with(ConsoleNotifier::stdout());

    if notifications.desktop_enabled {
        chain.with(DesktopNotifier::new(
            notifications.urgency,
            notifications.sound_enabled,
        ))
    } else {
        chain
    }
}
