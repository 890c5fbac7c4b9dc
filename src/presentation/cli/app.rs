use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// skywatch — weather monitoring engine
///
/// Polls current weather for configured locations, detects sustained
/// temperature threshold breaches, and rolls observations up into daily
/// summaries.
#[derive(Parser, Debug)]
#[command(name = "skywatch")]
#[command(version, about, long_about)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to custom config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the monitoring daemon
    #[command(alias = "d")]
    Daemon,

    /// Show daily summaries for a location
    #[command(alias = "r")]
    Report {
        /// Location to report on
        location: String,

        /// Number of past days to include
        #[arg(long, default_value = "7")]
        days: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show recent above-threshold readings for a location
    #[command(alias = "a")]
    Alerts {
        /// Location to inspect
        location: String,

        /// Maximum number of readings to show
        #[arg(long, default_value = "10")]
        limit: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
