//! Command-line interface configuration

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::AppConfig;

/// Infura Gas API command-line client
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    // Credentials
    /// Infura API key
    #[arg(long, global = true, env = "INFURA_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Infura API key secret (enables Basic authentication)
    #[arg(long, global = true, env = "INFURA_API_KEY_SECRET", hide_env_values = true)]
    pub api_key_secret: Option<String>,

    // Connection
    /// Gas API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Print HTTP request and response details
    #[arg(short, long, global = true)]
    pub debug: bool,

    // Logging
    /// Log filter (e.g., "infura_gas=debug,infura_gas_cli=info")
    #[arg(long, global = true, default_value = "infura_gas=info,infura_gas_cli=info")]
    pub log_filter: String,

    /// Path to configuration file (overridden by CLI args)
    #[arg(short, long, global = true, env = "INFURA_GAS_CONFIG_FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Suggested low/medium/high gas fees
    Fees(ChainArgs),
    /// Recent base fee history
    History(ChainArgs),
    /// Current base fee percentile
    Percentile(ChainArgs),
    /// Busy threshold for priority fees
    BusyThreshold(ChainArgs),
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ChainArgs {
    /// Chain ID (1 = Ethereum mainnet)
    #[arg(short = 'n', long, default_value_t = 1, allow_negative_numbers = true)]
    pub chain_id: i64,
}

impl Cli {
    /// Apply CLI arguments on top of the loaded configuration
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(api_key) = &self.api_key {
            config.api.api_key = api_key.clone();
        }
        if let Some(secret) = &self.api_key_secret {
            config.api.api_key_secret = secret.clone();
        }
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config.api.timeout_secs = timeout_secs;
        }
        if self.debug {
            config.api.debug = true;
        }
    }

    /// Log filter, with diagnostic output let through in debug mode
    pub fn effective_log_filter(&self, debug: bool) -> String {
        if debug {
            format!("{},infura_gas::diagnostics=debug", self.log_filter)
        } else {
            self.log_filter.clone()
        }
    }
}
