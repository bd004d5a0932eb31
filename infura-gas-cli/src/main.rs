//! Infura Gas CLI - query the Infura Gas API from the command line

mod cli;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use infura_gas::InfuraGasClient;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    cli::{Cli, Command},
    config::AppConfig,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration, then let the command line override it
    let mut config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    cli.apply_overrides(&mut config);

    // Initialize tracing to stderr so stdout carries only the result
    let default_filter = cli.effective_log_filter(config.api.debug);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();

    anyhow::ensure!(
        !config.api.api_key.is_empty(),
        "No API key configured (use --api-key, INFURA_API_KEY or a config file)"
    );

    debug!("Configuration loaded:");
    debug!("  Base URL: {}", config.api.base_url);
    debug!("  Timeout: {}s", config.api.timeout_secs);
    debug!(
        "  Authentication: {}",
        if config.api.api_key_secret.is_empty() {
            "API key in URL path"
        } else {
            "Basic (API key + secret)"
        }
    );

    let client = config.to_client().context("Failed to create gas API client")?;

    let output = run(&client, &cli.command).await?;
    println!("{}", output);

    Ok(())
}

/// Execute one command and render its result as pretty JSON
async fn run(client: &InfuraGasClient, command: &Command) -> Result<String> {
    let output = match command {
        Command::Fees(args) => {
            info!("Fetching suggested gas fees for chain {}", args.chain_id);
            let fees = client
                .get_suggested_gas_fees(args.chain_id)
                .await
                .context("Failed to fetch suggested gas fees")?;
            serde_json::to_string_pretty(&fees)?
        }
        Command::History(args) => {
            info!("Fetching base fee history for chain {}", args.chain_id);
            let history = client
                .get_base_fee_history(args.chain_id)
                .await
                .context("Failed to fetch base fee history")?;
            serde_json::to_string_pretty(&history)?
        }
        Command::Percentile(args) => {
            info!("Fetching base fee percentile for chain {}", args.chain_id);
            let percentile = client
                .get_base_fee_percentile(args.chain_id)
                .await
                .context("Failed to fetch base fee percentile")?;
            serde_json::to_string_pretty(&percentile)?
        }
        Command::BusyThreshold(args) => {
            info!("Fetching busy threshold for chain {}", args.chain_id);
            let threshold = client
                .get_busy_threshold(args.chain_id)
                .await
                .context("Failed to fetch busy threshold")?;
            serde_json::to_string_pretty(&threshold)?
        }
    };

    Ok(output)
}
