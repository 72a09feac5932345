use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::{AppError, Currency, Result};
use crate::modules::tariffs::models::calculation::{MAX_AMOUNT, MAX_WEIGHT_GRAMS};

/// Raw form submission. Numeric fields arrive as user-entered strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub retail_price: String,
    pub shipping_cost: String,
    pub weight: String,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default = "default_wto_member")]
    pub is_wto_member: bool,
}

fn default_wto_member() -> bool {
    true
}

/// Submission with every field parsed, ready for a rate lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedRequest {
    pub retail_price: Decimal,
    pub shipping_cost: Decimal,
    pub weight_grams: Decimal,
    pub currency: Currency,
    pub is_wto_member: bool,
}

impl CalculationRequest {
    /// Parse every field, failing on the first one that is not a
    /// non-negative decimal number within its accepted range.
    pub fn parse(&self) -> Result<ParsedRequest> {
        let currency = match self.currency.as_deref().map(str::trim) {
            None | Some("") => Currency::default(),
            Some(code) => code.parse().map_err(AppError::InvalidInput)?,
        };

        Ok(ParsedRequest {
            retail_price: parse_amount("retail_price", &self.retail_price, MAX_AMOUNT)?,
            shipping_cost: parse_amount("shipping_cost", &self.shipping_cost, MAX_AMOUNT)?,
            weight_grams: parse_amount("weight", &self.weight, MAX_WEIGHT_GRAMS)?,
            currency,
            is_wto_member: self.is_wto_member,
        })
    }
}

fn parse_amount(field: &str, raw: &str, max: Decimal) -> Result<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::invalid_input(format!("{} is required", field)));
    }

    // Scientific notation is what an HTML number input may submit for large values
    let value = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| AppError::invalid_input(format!("{} must be a number, got '{}'", field, trimmed)))?;

    if value.is_sign_negative() && !value.is_zero() {
        return Err(AppError::invalid_input(format!(
            "{} cannot be negative",
            field
        )));
    }

    if value > max {
        return Err(AppError::invalid_input(format!(
            "{} cannot exceed {}",
            field, max
        )));
    }

    Ok(value)
}
