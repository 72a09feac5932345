use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info};

use crate::core::Result;
use crate::modules::exchange_rates::services::ExchangeRateProvider;
use crate::modules::tariffs::models::{
    CalculationBreakdown, CalculationInput, CalculationRequest, CalculationResult,
};
use crate::modules::tariffs::services::TariffCalculator;

/// A finished calculation together with its human-readable breakdown
#[derive(Debug, Clone, Serialize)]
pub struct Quote {
    pub result: CalculationResult,
    pub breakdown: CalculationBreakdown,
}

/// Service turning a form submission into a quote
///
/// Resolves the exchange rate through the injected provider and hands a
/// validated input to the pure calculator. Every failure is terminal for the
/// submission: no partial result and no fallback rate.
pub struct TariffService {
    calculator: TariffCalculator,
    rates: Arc<dyn ExchangeRateProvider>,
}

impl TariffService {
    pub fn new(calculator: TariffCalculator, rates: Arc<dyn ExchangeRateProvider>) -> Self {
        Self { calculator, rates }
    }

    pub fn calculator(&self) -> &TariffCalculator {
        &self.calculator
    }

    /// Parse, resolve the rate, calculate.
    ///
    /// Input is parsed and range-checked before the rate lookup, so a malformed
    /// or out-of-range submission never reaches the upstream service.
    pub async fn quote(&self, request: &CalculationRequest) -> Result<Quote> {
        let parsed = request.parse()?;

        let table = self.rates.fetch_rates(parsed.currency).await.map_err(|e| {
            error!(
                provider = %self.rates.name(),
                currency = %parsed.currency,
                error = %e,
                "Rate lookup failed, calculation not attempted"
            );
            e
        })?;
        let exchange_rate = table.jpy_rate()?;

        let input = CalculationInput::new(
            parsed.retail_price,
            parsed.shipping_cost,
            parsed.weight_grams,
            exchange_rate,
            parsed.is_wto_member,
            parsed.currency,
        )?;

        let result = self.calculator.calculate(&input);
        let breakdown = CalculationBreakdown::from_result(&result, self.calculator.rates());

        info!(
            currency = %input.currency,
            exchange_rate = %exchange_rate,
            wto_member = input.is_wto_member,
            total = %result.total_amount_in_jpy,
            "Landed cost quoted"
        );

        Ok(Quote { result, breakdown })
    }
}
