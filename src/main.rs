use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use tradecast::adapter::inbound::cli::{
    self, command::Cli, output, output::OutputConfig,
};

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig { json: cli.json });

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let path = cli::config_path(cli.config.as_deref());
    let config = cli::load_config(path.as_deref()).with_context(|| match &path {
        Some(path) => format!("failed to load config from {}", path.display()),
        None => "failed to load default config".to_string(),
    })?;

    config.init_logging();
    debug!(config = ?path, "tradecast starting");

    cli::execute(cli, &config, path.as_deref()).await?;
    Ok(())
}
