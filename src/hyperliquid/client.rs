//! HTTP client for the Hyperliquid info endpoint

use std::time::Duration;

use serde_json::json;
use thiserror::Error;
use tracing::{debug, warn};

use crate::hyperliquid::types::{ClearinghouseState, OpenOrder};

/// Mainnet info endpoint
pub const MAINNET_INFO_URL: &str = "https://api.hyperliquid.xyz/info";

/// Testnet info endpoint
pub const TESTNET_INFO_URL: &str = "https://api.hyperliquid-testnet.xyz/info";

/// Request timeout for info calls
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub enum InfoError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("info API returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("failed to decode info API response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for the unauthenticated Hyperliquid info API.
///
/// Every call is a POST to the same endpoint with a `type` discriminator in
/// the JSON body.
#[derive(Debug, Clone)]
pub struct InfoClient {
    http: reqwest::Client,
    info_url: String,
}

impl InfoClient {
    pub fn new(info_url: impl Into<String>) -> Result<Self, InfoError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            info_url: info_url.into(),
        })
    }

    /// Fetch the clearinghouse state for an address.
    ///
    /// The API returns JSON `null` for new or unknown addresses; that maps to
    /// `None` and is treated by callers as "no positions", not a failure.
    pub async fn clearinghouse_state(
        &self,
        address: &str,
    ) -> Result<Option<ClearinghouseState>, InfoError> {
        debug!("Fetching clearinghouse state for {}", address);

        let response = self
            .http
            .post(&self.info_url)
            .json(&json!({ "type": "clearinghouseState", "user": address }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(InfoError::Status(status));
        }

        let value: serde_json::Value = response.json().await?;
        if value.is_null() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_value(value)?))
    }

    /// Fetch open orders for an address. The feed may be empty and may omit
    /// trigger orders entirely.
    pub async fn open_orders(&self, address: &str) -> Result<Vec<OpenOrder>, InfoError> {
        debug!("Fetching open orders for {}", address);

        let response = self
            .http
            .post(&self.info_url)
            .json(&json!({ "type": "openOrders", "user": address }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(InfoError::Status(status));
        }

        Ok(response.json().await?)
    }

    /// Fetch account state and open orders concurrently.
    ///
    /// A failed order fetch degrades to an empty order list so the position
    /// view still renders; a failed state fetch is a real error.
    pub async fn fetch_snapshot(
        &self,
        address: &str,
    ) -> Result<(Option<ClearinghouseState>, Vec<OpenOrder>), InfoError> {
        let (state, orders) = tokio::join!(
            self.clearinghouse_state(address),
            self.open_orders(address)
        );

        let orders = match orders {
            Ok(orders) => orders,
            Err(e) => {
                warn!("Open orders fetch failed, continuing without orders: {}", e);
                Vec::new()
            }
        };

        Ok((state?, orders))
    }
}
