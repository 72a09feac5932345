use crate::core::{Currency, Result};
use crate::modules::exchange_rates::models::RateTable;
use async_trait::async_trait;

/// Source of currency conversion rates.
///
/// Implementations resolve a full rate table for one base currency or fail
/// with `AppError::RateUnavailable`. Callers never substitute a default rate.
#[async_trait]
pub trait ExchangeRateProvider: Send + Sync {
    /// Fetch the latest rates relative to `base`
    async fn fetch_rates(&self, base: Currency) -> Result<RateTable>;

    /// Provider name for logs
    fn name(&self) -> &str;
}
