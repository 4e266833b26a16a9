//! Published gas price tiers per chain
//!
//! Reference data only; a watch run does not consult it.

use std::collections::BTreeMap;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::GasConfig;
use crate::github::{UpstreamError, fetch_json};

/// Low / average / high gas price of one chain
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GasPriceTiers {
    pub low: f64,
    pub average: f64,
    pub high: f64,
}

/// Chain name to gas price tiers
pub type GasPrices = BTreeMap<String, GasPriceTiers>;

/// Client for the gas price reference endpoint
pub struct GasPriceClient {
    prices_url: String,
    http: Client,
}

impl GasPriceClient {
    pub fn from_config(config: &GasConfig) -> Result<Self, UpstreamError> {
        debug!(prices_url = %config.prices_url, "GasPriceClient::from_config: called");
        Ok(Self {
            prices_url: config.prices_url.clone(),
            http: Client::builder().build()?,
        })
    }

    pub async fn fetch_gas_prices(&self) -> Result<GasPrices, UpstreamError> {
        debug!("GasPriceClient::fetch_gas_prices: called");
        let prices: GasPrices = fetch_json(&self.http, &self.prices_url, &[]).await?;
        debug!(chain_count = %prices.len(), "GasPriceClient::fetch_gas_prices: fetched");
        Ok(prices)
    }
}
