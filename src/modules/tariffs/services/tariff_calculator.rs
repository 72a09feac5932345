use rust_decimal::Decimal;
use tracing::debug;

use crate::core::rounding::{
    convert_to_jpy, is_de_minimis, round_down_to, TARIFF_BASE_UNIT, TAX_UNIT,
};
use crate::modules::tariffs::models::{CalculationInput, CalculationResult, TaxRates};

/// Grams per kilogram, the unit the tobacco excise is quoted in.
const GRAMS_PER_KG: Decimal = rust_decimal_macros::dec!(1000);

/// TariffCalculator computes the landed cost of an imported shisha product.
///
/// All operations are pure: no I/O, no shared state. The rate table is
/// injected at construction and never changes afterwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct TariffCalculator {
    rates: TaxRates,
}

impl TariffCalculator {
    pub fn new(rates: TaxRates) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &TaxRates {
        &self.rates
    }

    /// Customs tax base: retail price × deemed-value ratio × exchange rate.
    /// Not rounded here; each consumer applies its own truncation.
    pub fn taxable_price_in_jpy(&self, retail_price: Decimal, exchange_rate: Decimal) -> Decimal {
        retail_price * self.rates.deemed_value_ratio * exchange_rate
    }

    pub fn is_exempt(&self, taxable_price_jpy: Decimal) -> bool {
        is_de_minimis(taxable_price_jpy, self.rates.de_minimis_threshold)
    }

    /// Customs duty: zero at or under the threshold, otherwise the 1,000-yen
    /// truncated base times the tariff rate, truncated to 100 yen.
    pub fn tariff_in_jpy(&self, taxable_price_jpy: Decimal, is_wto_member: bool) -> Decimal {
        let exempt = self.is_exempt(taxable_price_jpy);
        self.tariff_with_exemption(taxable_price_jpy, is_wto_member, exempt)
    }

    /// Tobacco excise by weight. No exemption threshold.
    pub fn tobacco_tax_in_jpy(&self, weight_grams: Decimal) -> Decimal {
        round_down_to(
            weight_grams * self.rates.tobacco_tax_per_kg / GRAMS_PER_KG,
            TAX_UNIT,
        )
    }

    /// Consumption tax on the duty-inclusive base. `tariff_jpy` must be the
    /// already-truncated output of [`Self::tariff_in_jpy`].
    pub fn consumption_tax_in_jpy(&self, taxable_price_jpy: Decimal, tariff_jpy: Decimal) -> Decimal {
        let exempt = self.is_exempt(taxable_price_jpy);
        self.consumption_tax_with_exemption(taxable_price_jpy, tariff_jpy, exempt)
    }

    pub fn total_amount_in_jpy(
        &self,
        retail_price_jpy: Decimal,
        customs_duty_jpy: Decimal,
        tobacco_tax_jpy: Decimal,
        consumption_tax_jpy: Decimal,
        shipping_cost_jpy: Decimal,
    ) -> Decimal {
        retail_price_jpy + customs_duty_jpy + tobacco_tax_jpy + consumption_tax_jpy + shipping_cost_jpy
    }

    /// Run the full pipeline for one input.
    ///
    /// Order is fixed: taxable price, exemption decision, customs duty,
    /// tobacco tax, consumption tax, currency conversions, total. The
    /// exemption is decided once on the unrounded taxable price and shared by
    /// duty and consumption tax.
    pub fn calculate(&self, input: &CalculationInput) -> CalculationResult {
        let rate = input.exchange_rate_jpy_per_unit;

        let taxable_price_in_jpy = self.taxable_price_in_jpy(input.retail_price, rate);
        let is_exempt = self.is_exempt(taxable_price_in_jpy);

        let customs_duty_in_jpy =
            self.tariff_with_exemption(taxable_price_in_jpy, input.is_wto_member, is_exempt);
        let tobacco_tax_in_jpy = self.tobacco_tax_in_jpy(input.weight_grams);
        let consumption_tax_in_jpy =
            self.consumption_tax_with_exemption(taxable_price_in_jpy, customs_duty_in_jpy, is_exempt);

        let retail_price_in_jpy = convert_to_jpy(input.retail_price, rate);
        let shipping_cost_in_jpy = convert_to_jpy(input.shipping_cost, rate);

        let total_amount_in_jpy = self.total_amount_in_jpy(
            retail_price_in_jpy,
            customs_duty_in_jpy,
            tobacco_tax_in_jpy,
            consumption_tax_in_jpy,
            shipping_cost_in_jpy,
        );

        debug!(
            currency = %input.currency,
            taxable_price = %taxable_price_in_jpy,
            exempt = is_exempt,
            customs_duty = %customs_duty_in_jpy,
            tobacco_tax = %tobacco_tax_in_jpy,
            consumption_tax = %consumption_tax_in_jpy,
            total = %total_amount_in_jpy,
            "Calculated landed cost"
        );

        CalculationResult {
            retail_price: input.retail_price,
            currency: input.currency,
            exchange_rate: rate,
            weight_grams: input.weight_grams,
            is_wto_member: input.is_wto_member,
            retail_price_in_jpy,
            taxable_price_in_jpy,
            is_exempt,
            customs_duty_in_jpy,
            tobacco_tax_in_jpy,
            consumption_tax_in_jpy,
            shipping_cost_in_jpy,
            total_amount_in_jpy,
        }
    }

    fn tariff_with_exemption(&self, taxable_price_jpy: Decimal, is_wto_member: bool, exempt: bool) -> Decimal {
        if exempt {
            return Decimal::ZERO;
        }

        let base = round_down_to(taxable_price_jpy, TARIFF_BASE_UNIT);
        round_down_to(base * self.rates.tariff_rate(is_wto_member), TAX_UNIT)
    }

    fn consumption_tax_with_exemption(&self, taxable_price_jpy: Decimal, tariff_jpy: Decimal, exempt: bool) -> Decimal {
        if exempt {
            return Decimal::ZERO;
        }

        let base = round_down_to(taxable_price_jpy + tariff_jpy, TARIFF_BASE_UNIT);
        round_down_to(base * self.rates.consumption_tax_rate, TAX_UNIT)
    }
}
