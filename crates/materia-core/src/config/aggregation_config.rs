//! Aggregation configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for the aggregation pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AggregationConfig {
    /// Location-escalation attempts per market. Default: 4.
    pub max_location_attempts: Option<u32>,
    /// Retry on a mass basis when no candidate conforms. Default: true.
    pub fallback_to_mass: Option<bool>,
    /// Drop a market without candidates instead of failing the request. Default: false.
    pub drop_unmatched_markets: Option<bool>,
}

impl AggregationConfig {
    pub fn effective_max_location_attempts(&self) -> u32 {
        self.max_location_attempts
            .unwrap_or(constants::DEFAULT_MAX_LOCATION_ATTEMPTS)
    }

    pub fn effective_fallback_to_mass(&self) -> bool {
        self.fallback_to_mass
            .unwrap_or(constants::DEFAULT_FALLBACK_TO_MASS)
    }

    pub fn effective_drop_unmatched_markets(&self) -> bool {
        self.drop_unmatched_markets
            .unwrap_or(constants::DEFAULT_DROP_UNMATCHED_MARKETS)
    }
}
