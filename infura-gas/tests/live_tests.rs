//! Calls against the real Infura Gas API.
//!
//! Ignored by default; run with
//! `INFURA_API_KEY=... cargo test -p infura-gas --test live_tests -- --ignored`.

use infura_gas::InfuraGasClient;

fn live_client() -> InfuraGasClient {
    let api_key = std::env::var("INFURA_API_KEY").expect("INFURA_API_KEY must be set");
    InfuraGasClient::with_api_key(api_key).unwrap()
}

#[tokio::test]
#[ignore = "requires INFURA_API_KEY and network access"]
async fn live_suggested_gas_fees() {
    let fees = live_client().get_suggested_gas_fees(1).await.unwrap();
    println!("{:#?}", fees);
    assert!(!fees.estimated_base_fee.is_empty());
    assert!((0.0..=1.0).contains(&fees.network_congestion));
}

#[tokio::test]
#[ignore = "requires INFURA_API_KEY and network access"]
async fn live_base_fee_history() {
    let history = live_client().get_base_fee_history(1).await.unwrap();
    println!("{} entries", history.len());
    assert!(!history.is_empty());
}

#[tokio::test]
#[ignore = "requires INFURA_API_KEY and network access"]
async fn live_base_fee_percentile() {
    let percentile = live_client().get_base_fee_percentile(1).await.unwrap();
    println!("{:#?}", percentile);
    assert!(!percentile.base_fee_percentile.is_empty());
}

#[tokio::test]
#[ignore = "requires INFURA_API_KEY and network access"]
async fn live_busy_threshold() {
    let threshold = live_client().get_busy_threshold(1).await.unwrap();
    println!("{:#?}", threshold);
    assert!(!threshold.busy_threshold.is_empty());
}
