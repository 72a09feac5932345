use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// Tobacco excise per 1,000 g of shisha tobacco, in yen.
pub const TOBACCO_TAX_PER_KG: Decimal = dec!(15244);

/// Consumption tax applied to the duty-inclusive base.
pub const CONSUMPTION_TAX_RATE: Decimal = dec!(0.10);

/// Customs duty for goods from WTO members.
pub const TARIFF_RATE_WTO: Decimal = dec!(0.298);

/// Customs duty for goods from non-members.
pub const TARIFF_RATE_NON_WTO: Decimal = dec!(0.35);

/// Taxable prices at or below this amount are exempt from duty and consumption tax.
pub const DE_MINIMIS_THRESHOLD: Decimal = dec!(10000);

/// Share of the retail price deemed to be the customs value.
pub const DEEMED_VALUE_RATIO: Decimal = dec!(0.6);

/// Immutable rate table injected into the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRates {
    pub tobacco_tax_per_kg: Decimal,
    pub consumption_tax_rate: Decimal,
    pub tariff_rate_wto: Decimal,
    pub tariff_rate_non_wto: Decimal,
    pub de_minimis_threshold: Decimal,
    pub deemed_value_ratio: Decimal,
}

impl TaxRates {
    /// Tariff rate for the importer's WTO status
    pub fn tariff_rate(&self, is_wto_member: bool) -> Decimal {
        if is_wto_member {
            self.tariff_rate_wto
        } else {
            self.tariff_rate_non_wto
        }
    }

    /// Rejects tables a calculator cannot be built from.
    /// Rates and the deemed-value ratio must lie in [0, 1]; amounts must be non-negative.
    pub fn validate(&self) -> Result<()> {
        let fractions = [
            ("consumption_tax_rate", self.consumption_tax_rate),
            ("tariff_rate_wto", self.tariff_rate_wto),
            ("tariff_rate_non_wto", self.tariff_rate_non_wto),
            ("deemed_value_ratio", self.deemed_value_ratio),
        ];

        for (name, value) in fractions {
            if value < Decimal::ZERO || value > Decimal::ONE {
                return Err(AppError::Configuration(format!(
                    "{} must be between 0 and 1, got {}",
                    name, value
                )));
            }
        }

        if self.tobacco_tax_per_kg < Decimal::ZERO {
            return Err(AppError::Configuration(
                "tobacco_tax_per_kg cannot be negative".to_string(),
            ));
        }

        if self.de_minimis_threshold < Decimal::ZERO {
            return Err(AppError::Configuration(
                "de_minimis_threshold cannot be negative".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for TaxRates {
    fn default() -> Self {
        Self {
            tobacco_tax_per_kg: TOBACCO_TAX_PER_KG,
            consumption_tax_rate: CONSUMPTION_TAX_RATE,
            tariff_rate_wto: TARIFF_RATE_WTO,
            tariff_rate_non_wto: TARIFF_RATE_NON_WTO,
            de_minimis_threshold: DE_MINIMIS_THRESHOLD,
            deemed_value_ratio: DEEMED_VALUE_RATIO,
        }
    }
}
