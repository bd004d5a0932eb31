//! The four read-only gas API endpoints

use reqwest::Method;
use serde::de::DeserializeOwned;
use std::fmt;
use tracing::debug;

use crate::{
    client::InfuraGasClient,
    error::Result,
    models::{BaseFeeHistory, BaseFeePercentile, BusyThreshold, SuggestedGasFees},
};

/// Read endpoints exposed under `/networks/{chainId}/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    SuggestedGasFees,
    BaseFeeHistory,
    BaseFeePercentile,
    BusyThreshold,
}

impl Endpoint {
    pub const ALL: [Endpoint; 4] = [
        Endpoint::SuggestedGasFees,
        Endpoint::BaseFeeHistory,
        Endpoint::BaseFeePercentile,
        Endpoint::BusyThreshold,
    ];

    /// Path segment used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::SuggestedGasFees => "suggestedGasFees",
            Endpoint::BaseFeeHistory => "baseFeeHistory",
            Endpoint::BaseFeePercentile => "baseFeePercentile",
            Endpoint::BusyThreshold => "busyThreshold",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl InfuraGasClient {
    /// Request path for `endpoint` on `chain_id` in this client's auth mode.
    pub fn endpoint_path(&self, chain_id: i64, endpoint: Endpoint) -> String {
        self.auth_mode().path_for(chain_id, endpoint)
    }

    // A top-level `null` body reads as the zero value, like a null field
    async fn fetch<T>(&self, chain_id: i64, endpoint: Endpoint) -> Result<T>
    where
        T: DeserializeOwned + fmt::Debug + Default,
    {
        let path = self.endpoint_path(chain_id, endpoint);
        self.invoke_json::<Option<T>, _>(Method::GET, &path, None::<&()>)
            .await
            .map(Option::unwrap_or_default)
    }

    /// Gets low/medium/high fee suggestions for a chain.
    ///
    /// # Arguments
    /// * `chain_id` - Chain identifier, forwarded as-is (1 = Ethereum mainnet)
    pub async fn get_suggested_gas_fees(&self, chain_id: i64) -> Result<SuggestedGasFees> {
        debug!("Fetching suggested gas fees for chain {}", chain_id);
        self.fetch(chain_id, Endpoint::SuggestedGasFees).await
    }

    /// Gets recent base fees, oldest first, exactly as the service orders them.
    pub async fn get_base_fee_history(&self, chain_id: i64) -> Result<BaseFeeHistory> {
        debug!("Fetching base fee history for chain {}", chain_id);
        self.fetch(chain_id, Endpoint::BaseFeeHistory).await
    }

    /// Gets where the current base fee sits relative to recent history.
    pub async fn get_base_fee_percentile(&self, chain_id: i64) -> Result<BaseFeePercentile> {
        debug!("Fetching base fee percentile for chain {}", chain_id);
        self.fetch(chain_id, Endpoint::BaseFeePercentile).await
    }

    /// Gets the priority fee above which the network counts as busy.
    pub async fn get_busy_threshold(&self, chain_id: i64) -> Result<BusyThreshold> {
        debug!("Fetching busy threshold for chain {}", chain_id);
        self.fetch(chain_id, Endpoint::BusyThreshold).await
    }
}
