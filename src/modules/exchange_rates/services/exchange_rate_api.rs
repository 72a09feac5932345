use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, error};

use super::rate_provider::ExchangeRateProvider;
use crate::config::ExchangeRateConfig;
use crate::core::{AppError, Currency, Result};
use crate::modules::exchange_rates::models::RateTable;

/// Client for the ExchangeRate-API v6 "latest" endpoint
///
/// API Documentation: https://www.exchangerate-api.com/docs/standard-requests
pub struct ExchangeRateApiClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    result: String,
    #[serde(rename = "error-type")]
    error_type: Option<String>,
    #[serde(default)]
    conversion_rates: HashMap<String, Decimal>,
}

impl ExchangeRateApiClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `api_key` - API credential (from EXCHANGE_RATE_API_KEY); a missing key
    ///   fails each lookup rather than construction
    /// * `base_url` - API base URL without trailing slash
    /// * `timeout` - Per-request timeout
    pub fn new(api_key: Option<String>, base_url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ExchangeRateConfig) -> Result<Self> {
        Self::new(
            config.api_key.clone(),
            config.base_url.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    fn latest_url(&self, api_key: &str, base: Currency) -> String {
        format!("{}/v6/{}/latest/{}", self.base_url, api_key, base.code())
    }
}

#[async_trait]
impl ExchangeRateProvider for ExchangeRateApiClient {
    async fn fetch_rates(&self, base: Currency) -> Result<RateTable> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            error!(currency = %base, "Exchange rate API key is not configured");
            AppError::rate_unavailable("exchange rate API key is not configured")
        })?;

        debug!(currency = %base, "Fetching exchange rates");

        let response = self
            .client
            .get(self.latest_url(api_key, base))
            .send()
            .await
            .map_err(|e| {
                // reqwest errors carry the URL, which embeds the credential
                let e = e.without_url();
                error!(currency = %base, error = %e, "Exchange rate request failed");
                AppError::rate_unavailable(format!("request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            error!(currency = %base, status = %status, "Exchange rate API returned an error status");
            return Err(AppError::rate_unavailable(format!("HTTP error! status: {}", status)));
        }

        let body: LatestRatesResponse = response.json().await.map_err(|e| {
            let e = e.without_url();
            error!(currency = %base, error = %e, "Failed to parse exchange rate response");
            AppError::rate_unavailable(format!("invalid response body: {}", e))
        })?;

        if body.result != "success" {
            let reason = body.error_type.unwrap_or_else(|| body.result.clone());
            error!(currency = %base, reason = %reason, "Exchange rate API reported failure");
            return Err(AppError::rate_unavailable(format!("upstream error: {}", reason)));
        }

        debug!(
            currency = %base,
            rates = body.conversion_rates.len(),
            "Exchange rates fetched"
        );

        Ok(RateTable::new(base, body.conversion_rates))
    }

    fn name(&self) -> &str {
        "exchangerate-api"
    }
}
