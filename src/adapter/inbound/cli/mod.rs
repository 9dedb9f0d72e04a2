//! CLI module graph and command dispatch.

pub mod check;
pub mod command;
pub mod event;
pub mod output;
pub mod render;
pub mod send;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::infrastructure::config::Config;

use command::{CheckCommand, Cli, Commands};

/// Configuration file used when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "config.toml";

/// Resolve which configuration file to load.
///
/// An explicit path must exist; the default file is optional.
#[must_use]
pub fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG);
            default.exists().then_some(default)
        }
    }
}

/// Load the configuration at `path`, or defaults when there is none.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Config::parse_toml(""),
    }
}

/// Run the parsed command against a loaded configuration.
pub async fn execute(cli: &Cli, config: &Config, path: Option<&Path>) -> Result<()> {
    match &cli.command {
        Commands::Render(args) => render::execute(config, args),
        Commands::Send(args) => send::execute(config, args).await,
        Commands::Check(CheckCommand::Config) => check::execute_config(config, path),
    }
}
