//! Alarm Clock CLI
//!
//! Schedules a one-shot alarm notification for the next occurrence of a
//! wall-clock time and keeps running in the foreground until the alarm is
//! dismissed. Snooze and dismiss work both from the notification actions and
//! from the terminal while the alarm rings.

use anyhow::Result;
use chrono::Utc;
use clap::{CommandFactory, Parser};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{interval, sleep, Duration};

use alarm::cli::{Cli, Commands, Display, SetArgs};
use alarm::coordinator::{dispatch_event, AlarmCoordinator};
use alarm::notification::{action_ids, LocalNotificationSender, NotificationEvent, NotificationSender};
use alarm::types::{AlarmConfig, AlarmPhase};

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    init_tracing();

    // Parse command line arguments
    let cli = Cli::parse();

    // Execute command
    if let Err(e) = execute(cli).await {
        Display::show_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

/// Executes the CLI command.
async fn execute(cli: Cli) -> Result<()> {
    // Set verbose logging if requested
    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Set(args)) => run_alarm(args).await,
        Some(Commands::Test) => run_test().await,
        Some(Commands::Completions { shell }) => {
            generate_completions(shell);
            Ok(())
        }
        None => {
            // No command provided, show help
            Cli::command().print_help()?;
            Ok(())
        }
    }
}

/// Schedules the alarm and runs the foreground event loop until dismissal.
async fn run_alarm(args: SetArgs) -> Result<()> {
    let config = AlarmConfig::default()
        .with_time_zone(args.timezone)
        .with_snooze_minutes(args.snooze);
    config.validate().map_err(anyhow::Error::msg)?;

    let tz = config.time_zone;
    let mut coordinator = AlarmCoordinator::new(config, LocalNotificationSender::new())?;
    coordinator.bridge_mut().on_trigger(Display::show_triggered);
    coordinator
        .bridge_mut()
        .on_snooze_time_changed(move |until| Display::show_snoozed(until, tz));

    let target = coordinator.schedule_wall_time(args.time)?;
    Display::show_scheduled(target, tz);

    run_event_loop(&mut coordinator).await
}

/// Polls backend events and terminal input until the alarm is dismissed.
async fn run_event_loop(
    coordinator: &mut AlarmCoordinator<LocalNotificationSender>,
) -> Result<()> {
    let mut ticker = interval(Duration::from_millis(200));
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                while let Some(event) = coordinator.sender().try_recv_event() {
                    if let Err(e) = dispatch_event(coordinator, &event) {
                        Display::show_error(&format!("{} ({})", e, e.suggestion()));
                    }
                }
            }
            line = input.next_line() => {
                match line?.as_deref().map(str::trim) {
                    Some("s") => inject_action(coordinator, action_ids::SNOOZE),
                    Some("d") => inject_action(coordinator, action_ids::DISMISS),
                    Some("q") | None => {
                        coordinator.reset();
                        return Ok(());
                    }
                    Some(_) => {}
                }
            }
            _ = tokio::signal::ctrl_c() => {
                coordinator.reset();
                return Ok(());
            }
        }

        if coordinator.alarm().phase == AlarmPhase::Idle {
            Display::show_dismissed();
            return Ok(());
        }
    }
}

/// Routes a terminal keypress through the same path as a notification action.
fn inject_action(coordinator: &mut AlarmCoordinator<LocalNotificationSender>, action: &str) {
    let event = NotificationEvent::action(action);
    if let Err(e) = dispatch_event(coordinator, &event) {
        Display::show_error(&format!("{} ({})", e, e.suggestion()));
    }
}

/// Fires a test alarm immediately and waits for it to come back.
async fn run_test() -> Result<()> {
    let mut coordinator =
        AlarmCoordinator::new(AlarmConfig::default(), LocalNotificationSender::new())?;
    coordinator.bridge_mut().on_trigger(Display::show_test_fired);

    coordinator.schedule(Utc::now())?;

    for _ in 0..50 {
        if let Some(event) = coordinator.sender().try_recv_event() {
            dispatch_event(&mut coordinator, &event)?;
            coordinator.reset();
            return Ok(());
        }
        sleep(Duration::from_millis(20)).await;
    }
    anyhow::bail!("test alarm did not fire");
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}
