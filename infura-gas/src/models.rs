use serde::{Deserialize, Deserializer, Serialize};

/// Reads an explicit JSON `null` the same way as an absent field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Response of the `suggestedGasFees` endpoint.
///
/// Values are passed through exactly as the service sends them; fee amounts
/// stay as decimal strings (gwei) and no range is validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SuggestedGasFees {
    #[serde(deserialize_with = "null_as_default")]
    pub low: GasFeeLevel,
    #[serde(deserialize_with = "null_as_default")]
    pub medium: GasFeeLevel,
    #[serde(deserialize_with = "null_as_default")]
    pub high: GasFeeLevel,

    /// Base fee expected for the next block
    #[serde(deserialize_with = "null_as_default")]
    pub estimated_base_fee: String,

    /// Network busyness between 0 and 1
    #[serde(deserialize_with = "null_as_default")]
    pub network_congestion: f64,

    /// `[min, max]` priority fee over recent blocks
    #[serde(deserialize_with = "null_as_default")]
    pub latest_priority_fee_range: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub historical_priority_fee_range: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub historical_base_fee_range: Vec<String>,

    /// Trend direction reported upstream (`"up"` / `"down"`)
    #[serde(deserialize_with = "null_as_default")]
    pub priority_fee_trend: String,
    #[serde(deserialize_with = "null_as_default")]
    pub base_fee_trend: String,
}

impl SuggestedGasFees {
    /// Returns the fee level for a given tier.
    pub fn level(&self, tier: FeeTier) -> &GasFeeLevel {
        match tier {
            FeeTier::Low => &self.low,
            FeeTier::Medium => &self.medium,
            FeeTier::High => &self.high,
        }
    }
}

/// One suggestion tier of [`SuggestedGasFees`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GasFeeLevel {
    #[serde(deserialize_with = "null_as_default")]
    pub suggested_max_priority_fee_per_gas: String,
    #[serde(deserialize_with = "null_as_default")]
    pub suggested_max_fee_per_gas: String,

    /// Lower bound of the expected inclusion wait, in milliseconds
    #[serde(deserialize_with = "null_as_default")]
    pub min_wait_time_estimate: i64,

    /// Upper bound of the expected inclusion wait, in milliseconds
    #[serde(deserialize_with = "null_as_default")]
    pub max_wait_time_estimate: i64,
}

/// Selects one of the three suggestion tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeeTier {
    Low,
    Medium,
    High,
}

/// Response of the `baseFeeHistory` endpoint.
///
/// The service returns a bare JSON array here, not an object.
pub type BaseFeeHistory = Vec<String>;

/// Response of the `baseFeePercentile` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BaseFeePercentile {
    #[serde(deserialize_with = "null_as_default")]
    pub base_fee_percentile: String,
}

/// Response of the `busyThreshold` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BusyThreshold {
    #[serde(deserialize_with = "null_as_default")]
    pub busy_threshold: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_suggested_gas_fees_wire_names() {
        let fees: SuggestedGasFees = serde_json::from_value(json!({
            "low": {
                "suggestedMaxPriorityFeePerGas": "0.05",
                "suggestedMaxFeePerGas": "24.086058416",
                "minWaitTimeEstimate": 15000,
                "maxWaitTimeEstimate": 30000
            },
            "estimatedBaseFee": "24.036058416",
            "networkCongestion": 0.7143,
            "latestPriorityFeeRange": ["0.1", "20"],
            "priorityFeeTrend": "down"
        }))
        .unwrap();

        assert_eq!(fees.low.suggested_max_fee_per_gas, "24.086058416");
        assert_eq!(fees.low.max_wait_time_estimate, 30000);
        assert_eq!(fees.estimated_base_fee, "24.036058416");
        assert_eq!(fees.network_congestion, 0.7143);
        assert_eq!(fees.latest_priority_fee_range, vec!["0.1", "20"]);
        assert_eq!(fees.priority_fee_trend, "down");

        // Absent fields fall back to zero values
        assert_eq!(fees.high, GasFeeLevel::default());
        assert!(fees.historical_base_fee_range.is_empty());
        assert_eq!(fees.base_fee_trend, "");
    }

    #[test]
    fn test_null_fields_read_as_absent() {
        let fees: SuggestedGasFees = serde_json::from_value(json!({
            "low": null,
            "medium": {
                "suggestedMaxFeePerGas": null,
                "minWaitTimeEstimate": null,
                "maxWaitTimeEstimate": 30000
            },
            "estimatedBaseFee": "24.0",
            "networkCongestion": 0.5,
            "historicalBaseFeeRange": null,
            "priorityFeeTrend": null
        }))
        .unwrap();

        assert_eq!(fees.low, GasFeeLevel::default());
        assert_eq!(fees.medium.suggested_max_fee_per_gas, "");
        assert_eq!(fees.medium.min_wait_time_estimate, 0);
        assert_eq!(fees.medium.max_wait_time_estimate, 30000);
        assert_eq!(fees.estimated_base_fee, "24.0");
        assert!(fees.historical_base_fee_range.is_empty());
        assert_eq!(fees.priority_fee_trend, "");

        let threshold: BusyThreshold =
            serde_json::from_value(json!({"busyThreshold": null})).unwrap();
        assert_eq!(threshold, BusyThreshold::default());
    }

    #[test]
    fn test_level_selects_tier() {
        let mut fees = SuggestedGasFees::default();
        fees.medium.suggested_max_fee_per_gas = "32.5".to_string();
        assert_eq!(fees.level(FeeTier::Medium).suggested_max_fee_per_gas, "32.5");
        assert_eq!(fees.level(FeeTier::High), &GasFeeLevel::default());
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let result = serde_json::from_value::<SuggestedGasFees>(json!({
            "networkCongestion": "very busy"
        }));
        assert!(result.is_err());

        let result = serde_json::from_value::<BaseFeeHistory>(json!({"history": []}));
        assert!(result.is_err());
    }
}
