//! Command-line interface definitions.
//!
//! Defines the CLI structure for the tradecast binary using `clap`: render an
//! event locally, send it through the configured channels, or check the
//! configuration.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::domain::{EventSource, Severity};

/// Render trading notifications and fan them out to chat, webhook and log channels
#[derive(Parser, Debug)]
#[command(name = "tradecast")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file [default: config.toml when present]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the tradecast CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render an event and print the subject and body
    Render(EventArgs),

    /// Render an event and deliver it to every configured channel
    Send(EventArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `tradecast check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration and the channels it enables.
    Config,
}

/// Describes the event to render.
///
/// Either loads a full event from JSON with `--event`, or builds a bare
/// notice from the flags. Flags given together with `--event` override the
/// matching fields of the loaded event.
#[derive(Args, Debug, Default)]
pub struct EventArgs {
    /// JSON file holding a notification event ("-" reads stdin)
    #[arg(long, value_name = "FILE")]
    pub event: Option<PathBuf>,

    /// Severity: debug, info, success, warn or error [default: info]
    #[arg(short, long)]
    pub severity: Option<Severity>,

    /// Free-form explanation appended to the message
    #[arg(short, long)]
    pub reason: Option<String>,

    /// Component the event originated from
    #[arg(long, value_enum)]
    pub source: Option<SourceArg>,

    /// Render the compact body regardless of configuration
    #[arg(long, conflicts_with = "verbose")]
    pub short: bool,

    /// Render the line-oriented body regardless of configuration
    #[arg(long)]
    pub verbose: bool,
}

/// CLI spelling of [`EventSource`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SourceArg {
    Signal,
    Trader,
    Balancer,
    Manual,
}

impl From<SourceArg> for EventSource {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Signal => Self::Signal,
            SourceArg::Trader => Self::Trader,
            SourceArg::Balancer => Self::Balancer,
            SourceArg::Manual => Self::Manual,
        }
    }
}
