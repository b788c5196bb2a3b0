mod api;
mod cli;
mod config;
mod ddns;
mod logging;
mod signal;

#[cfg(test)]
mod tests;

use anyhow::{Context, Result};
use api::NamecheapClient;
use clap::Parser;
use cli::Arguments;
use config::Config;
use ddns::Updater;
use env_logger::Target;
use logging::Logger;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Arguments::parse();
    let config = Config::load(&args.config_path).context("failed to get config")?;

    let logger = Logger::new(config.log_level.into(), Target::Stderr)
        .with("host", config.host.clone())
        .with("domain_name", config.domain_name.clone());

    let client = NamecheapClient::new(&config).context("failed to build HTTP client")?;

    let shutdown = CancellationToken::new();
    signal::cancel_on_shutdown_signal(shutdown.clone())
        .context("failed to install signal handler")?;

    Updater::new(client, logger, config.update_period)
        .run(shutdown)
        .await;

    Ok(())
}
