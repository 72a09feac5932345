use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::core::{AppError, Currency, Result};

/// Currency code every calculation converts into.
pub const TARGET_CURRENCY: &str = "JPY";

/// Conversion rates relative to one base currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    pub base_code: Currency,
    pub conversion_rates: HashMap<String, Decimal>,
}

impl RateTable {
    pub fn new(base_code: Currency, conversion_rates: HashMap<String, Decimal>) -> Self {
        Self {
            base_code,
            conversion_rates,
        }
    }

    /// Yen per unit of the base currency.
    ///
    /// A missing or non-positive entry means the calculation cannot proceed;
    /// it is never read as zero or one.
    pub fn jpy_rate(&self) -> Result<Decimal> {
        match self.conversion_rates.get(TARGET_CURRENCY) {
            Some(rate) if *rate > Decimal::ZERO => Ok(*rate),
            Some(rate) => Err(AppError::rate_unavailable(format!(
                "{} rate for {} is not positive: {}",
                TARGET_CURRENCY, self.base_code, rate
            ))),
            None => Err(AppError::rate_unavailable(format!(
                "no {} rate in table for {}",
                TARGET_CURRENCY, self.base_code
            ))),
        }
    }
}
