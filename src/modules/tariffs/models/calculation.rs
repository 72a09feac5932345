// A calculation input is built from one submission and consumed once by the
// calculator. Bounds keep every intermediate product well inside Decimal's
// 96-bit mantissa, so the pure calculation functions cannot overflow.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Currency, Result};

/// Largest accepted retail price or shipping cost, in source-currency units.
pub const MAX_AMOUNT: Decimal = dec!(1_000_000_000_000);

/// Largest accepted product weight, in grams.
pub const MAX_WEIGHT_GRAMS: Decimal = dec!(1_000_000_000);

/// Largest accepted exchange rate, in yen per source-currency unit.
pub const MAX_EXCHANGE_RATE: Decimal = dec!(1_000_000);

/// Validated inputs for one landed-cost calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculationInput {
    pub retail_price: Decimal,
    pub shipping_cost: Decimal,
    pub weight_grams: Decimal,
    pub exchange_rate_jpy_per_unit: Decimal,
    pub is_wto_member: bool,
    pub currency: Currency,
}

impl CalculationInput {
    /// Create a calculation input with validation
    ///
    /// # Arguments
    /// * `retail_price` - Retail price in the source currency, non-negative
    /// * `shipping_cost` - Shipping cost in the source currency, non-negative
    /// * `weight_grams` - Product weight in grams, non-negative
    /// * `exchange_rate_jpy_per_unit` - Yen per source-currency unit, strictly positive
    /// * `is_wto_member` - Whether the exporting country is a WTO member
    /// * `currency` - Source currency, echoed into the result
    pub fn new(
        retail_price: Decimal,
        shipping_cost: Decimal,
        weight_grams: Decimal,
        exchange_rate_jpy_per_unit: Decimal,
        is_wto_member: bool,
        currency: Currency,
    ) -> Result<Self> {
        Self::validate_bounded("retail_price", retail_price, MAX_AMOUNT)?;
        Self::validate_bounded("shipping_cost", shipping_cost, MAX_AMOUNT)?;
        Self::validate_bounded("weight", weight_grams, MAX_WEIGHT_GRAMS)?;
        Self::validate_exchange_rate(exchange_rate_jpy_per_unit)?;

        Ok(Self {
            retail_price,
            shipping_cost,
            weight_grams,
            exchange_rate_jpy_per_unit,
            is_wto_member,
            currency,
        })
    }

    fn validate_bounded(field: &str, value: Decimal, max: Decimal) -> Result<()> {
        if value < Decimal::ZERO {
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

        Ok(())
    }

    fn validate_exchange_rate(rate: Decimal) -> Result<()> {
        if rate <= Decimal::ZERO {
            return Err(AppError::invalid_input(
                "exchange rate must be greater than zero",
            ));
        }

        if rate > MAX_EXCHANGE_RATE {
            return Err(AppError::invalid_input(format!(
                "exchange rate cannot exceed {}",
                MAX_EXCHANGE_RATE
            )));
        }

        Ok(())
    }
}

/// Every intermediate and final yen amount of one calculation.
///
/// Yen amounts are whole numbers except `taxable_price_in_jpy`, which is kept
/// unrounded because both exemption checks compare against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Retail price echoed in the source currency
    pub retail_price: Decimal,
    pub currency: Currency,
    pub exchange_rate: Decimal,
    pub weight_grams: Decimal,
    pub is_wto_member: bool,
    pub retail_price_in_jpy: Decimal,
    pub taxable_price_in_jpy: Decimal,
    /// True when the taxable price fell at or under the de-minimis threshold
    pub is_exempt: bool,
    pub customs_duty_in_jpy: Decimal,
    pub tobacco_tax_in_jpy: Decimal,
    pub consumption_tax_in_jpy: Decimal,
    pub shipping_cost_in_jpy: Decimal,
    pub total_amount_in_jpy: Decimal,
}

impl CalculationResult {
    /// Sum of the five components the total is made of
    pub fn components_sum(&self) -> Decimal {
        self.retail_price_in_jpy
            + self.customs_duty_in_jpy
            + self.tobacco_tax_in_jpy
            + self.consumption_tax_in_jpy
            + self.shipping_cost_in_jpy
    }
}
