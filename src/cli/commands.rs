//! Command definitions for the alarm clock CLI.
//!
//! Uses clap derive macro for argument parsing.

use chrono_tz::Tz;
use clap::{Args, Parser, Subcommand};

use crate::clock::WallTime;

// ============================================================================
// CLI Structure
// ============================================================================

/// Alarm clock CLI
#[derive(Parser, Debug)]
#[command(
    name = "alarm",
    version,
    about = "Single-alarm alarm clock with snooze and dismiss actions",
    long_about = "Schedules a one-shot alarm notification for the next occurrence of a \
                  wall-clock time and keeps running until the alarm is dismissed. While \
                  the alarm rings, type 's' to snooze or 'd' to dismiss.",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Set the alarm and wait for it to fire
    Set(SetArgs),

    /// Fire a test alarm notification immediately
    Test,

    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ============================================================================
// Set Command Arguments
// ============================================================================

/// Arguments for the set command
#[derive(Args, Debug, Clone)]
pub struct SetArgs {
    /// Alarm time as HH:MM (24-hour wall clock)
    pub time: WallTime,

    /// IANA time zone the wall-clock time refers to
    #[arg(long, default_value = "Asia/Colombo")]
    pub timezone: Tz,

    /// Snooze delay in minutes (1-60)
    #[arg(
        long,
        default_value = "1",
        value_parser = clap::value_parser!(u32).range(1..=60)
    )]
    pub snooze: u32,
}

// ============================================================================
// Tests
// ============================================================================
