//! Infura Gas - a client for the Infura Gas API
//!
//! Fetches gas fee suggestions, base fee history, base fee percentile and
//! busy threshold for any EVM chain the service knows about.
//!
//! # Authentication
//! - API key and secret: sent as a Basic `Authorization` header, requests go
//!   to `/networks/{chainId}/{endpoint}`.
//! - API key only (or an empty secret): the key is placed in the path,
//!   requests go to `/v3/{apiKey}/networks/{chainId}/{endpoint}`.
//!
//! # Example
//! ```no_run
//! use infura_gas::{ClientOption, InfuraGasClient};
//! use std::time::Duration;
//!
//! # async fn run() -> infura_gas::Result<()> {
//! let client = InfuraGasClient::with_api_key_and_options(
//!     "your-api-key",
//!     [ClientOption::Timeout(Duration::from_secs(10))],
//! )?;
//!
//! let fees = client.get_suggested_gas_fees(1).await?;
//! println!("medium max fee: {} gwei", fees.medium.suggested_max_fee_per_gas);
//! # Ok(())
//! # }
//! ```

// Public modules
pub mod diagnostics;
pub mod error;

mod auth;
mod client;
mod endpoint;
mod models;
mod transport;

// Public exports
pub use auth::AuthMode;
pub use client::{ClientConfig, ClientOption, InfuraGasClient, BASE_URL, DEFAULT_TIMEOUT};
pub use diagnostics::{mask_auth_header, DiagnosticSink, MemorySink, TracingSink};
pub use endpoint::Endpoint;
pub use error::{GasApiError, Result};
pub use models::{
    BaseFeeHistory, BaseFeePercentile, BusyThreshold, FeeTier, GasFeeLevel, SuggestedGasFees,
};
pub use reqwest::Method;
