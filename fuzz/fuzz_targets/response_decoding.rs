#![no_main]

use infura_gas::{BaseFeeHistory, BaseFeePercentile, BusyThreshold, SuggestedGasFees};
use libfuzzer_sys::fuzz_target;

// Fuzz gas API response decoding
fuzz_target!(|data: &[u8]| {
    let _ = serde_json::from_slice::<SuggestedGasFees>(data);
    let _ = serde_json::from_slice::<BusyThreshold>(data);
    let _ = serde_json::from_slice::<BaseFeePercentile>(data);

    // History is a bare array; whatever decodes must survive re-encoding
    if let Ok(history) = serde_json::from_slice::<BaseFeeHistory>(data) {
        let encoded = serde_json::to_vec(&history).expect("history re-encodes");
        let decoded: BaseFeeHistory = serde_json::from_slice(&encoded).expect("history decodes");
        assert_eq!(history, decoded);
    }
});
