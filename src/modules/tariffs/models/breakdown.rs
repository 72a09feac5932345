//! Human-readable breakdown of a calculation.
//!
//! Each line carries the yen amount and the formula notes shown next to it.
//! Every number in the notes is derived from the same [`TaxRates`] and
//! [`CalculationResult`] the amounts came from, so text and values cannot
//! drift apart.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::fmt;

use crate::core::rounding::{round_down_to, TARIFF_BASE_UNIT, TAX_UNIT};
use crate::modules::tariffs::models::{CalculationResult, TaxRates};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    ExchangeRate,
    RetailPrice,
    TaxablePrice,
    CustomsDuty,
    TobaccoTax,
    ConsumptionTax,
    ShippingCost,
    Total,
}

#[derive(Debug, Clone, Serialize)]
pub struct BreakdownLine {
    pub kind: LineKind,
    pub label: String,
    pub amount: Decimal,
    /// Amount with thousands separators and a currency suffix
    pub display: String,
    pub formula: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalculationBreakdown {
    pub lines: Vec<BreakdownLine>,
}

impl CalculationBreakdown {
    pub fn from_result(result: &CalculationResult, rates: &TaxRates) -> Self {
        let threshold_note = format!(
            "exempt when taxable price is {} JPY or less",
            format_amount(rates.de_minimis_threshold)
        );
        let tax_unit_note = format!("floored to {} JPY", format_amount(TAX_UNIT));

        let lines = vec![
            line(
                LineKind::ExchangeRate,
                format!("Exchange rate (1 {})", result.currency),
                result.exchange_rate,
                vec![],
            ),
            line(
                LineKind::RetailPrice,
                "Retail price".to_string(),
                result.retail_price_in_jpy,
                vec![format!(
                    "retail price {} {} × exchange rate {}",
                    format_amount(result.retail_price),
                    result.currency,
                    format_amount(result.exchange_rate)
                )],
            ),
            line(
                LineKind::TaxablePrice,
                "Taxable price".to_string(),
                result.taxable_price_in_jpy,
                vec![format!(
                    "retail price {} {} × exchange rate {} × {}",
                    format_amount(result.retail_price),
                    result.currency,
                    format_amount(result.exchange_rate),
                    rates.deemed_value_ratio.normalize()
                )],
            ),
            line(
                LineKind::CustomsDuty,
                "Customs duty".to_string(),
                result.customs_duty_in_jpy,
                vec![
                    format!(
                        "taxable price (floored to {} JPY) {} JPY × {}",
                        format_amount(TARIFF_BASE_UNIT),
                        format_amount(round_down_to(result.taxable_price_in_jpy, TARIFF_BASE_UNIT)),
                        format_percent(rates.tariff_rate(result.is_wto_member))
                    ),
                    tax_unit_note.clone(),
                    threshold_note.clone(),
                ],
            ),
            line(
                LineKind::TobaccoTax,
                "Tobacco tax".to_string(),
                result.tobacco_tax_in_jpy,
                vec![
                    format!(
                        "weight {}g × {} JPY/1000g",
                        format_amount(result.weight_grams),
                        format_amount(rates.tobacco_tax_per_kg)
                    ),
                    tax_unit_note.clone(),
                ],
            ),
            line(
                LineKind::ConsumptionTax,
                "Consumption tax".to_string(),
                result.consumption_tax_in_jpy,
                vec![
                    format!(
                        "(taxable price {} JPY + customs duty {} JPY, floored to {} JPY) × {}",
                        format_amount(result.taxable_price_in_jpy),
                        format_amount(result.customs_duty_in_jpy),
                        format_amount(TARIFF_BASE_UNIT),
                        format_percent(rates.consumption_tax_rate)
                    ),
                    tax_unit_note,
                    threshold_note,
                ],
            ),
            line(
                LineKind::ShippingCost,
                "Shipping".to_string(),
                result.shipping_cost_in_jpy,
                vec![],
            ),
            line(
                LineKind::Total,
                "Total".to_string(),
                result.total_amount_in_jpy,
                vec![],
            ),
        ];

        Self { lines }
    }

    pub fn get(&self, kind: LineKind) -> Option<&BreakdownLine> {
        self.lines.iter().find(|line| line.kind == kind)
    }
}

impl fmt::Display for CalculationBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}: {}", line.label, line.display)?;
            for note in &line.formula {
                writeln!(f, "    {}", note)?;
            }
        }
        Ok(())
    }
}

fn line(kind: LineKind, label: String, amount: Decimal, formula: Vec<String>) -> BreakdownLine {
    BreakdownLine {
        kind,
        label,
        amount,
        display: format!("{} JPY", format_amount(amount)),
        formula,
    }
}

/// Format a decimal with thousands separators on the integer part.
///
/// The fraction is printed in full, so a formula built from these strings
/// reproduces the amounts the calculator used.
pub fn format_amount(amount: Decimal) -> String {
    let normalized = amount.normalize();
    let text = normalized.abs().to_string();
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if normalized.is_sign_negative() && !normalized.is_zero() { "-" } else { "" };
    match fraction {
        Some(fraction) => format!("{}{}.{}", sign, grouped, fraction),
        None => format!("{}{}", sign, grouped),
    }
}

/// Format a fractional rate as a percentage, e.g. 0.298 as "29.8%".
pub fn format_percent(rate: Decimal) -> String {
    format!("{}%", (rate * dec!(100)).normalize())
}
