// Property-based tests for the landed-cost pipeline
//
// Validates:
// - de-minimis boundary for duty and consumption tax (inclusive at 10,000 yen)
// - total equals the exact sum of its five components
// - identical inputs always produce identical results
// - every yen amount except the taxable price is a whole number
// - the worked scenarios for exempt, WTO and non-WTO shipments

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use shisha_tariff::core::Currency;
use shisha_tariff::tariffs::{CalculationInput, TariffCalculator, TaxRates};

fn calculator() -> TariffCalculator {
    TariffCalculator::new(TaxRates::default())
}

fn input(
    retail_price: Decimal,
    shipping_cost: Decimal,
    weight: Decimal,
    rate: Decimal,
    is_wto_member: bool,
) -> CalculationInput {
    CalculationInput::new(
        retail_price,
        shipping_cost,
        weight,
        rate,
        is_wto_member,
        Currency::USD,
    )
    .unwrap()
}

prop_compose! {
    fn any_input()(
        price_cents in 0u64..100_000_000u64,     // 0.00 to 1,000,000.00
        shipping_cents in 0u64..10_000_000u64,   // 0.00 to 100,000.00
        weight_grams in 0u64..100_000u64,
        rate_ten_thousandths in 1u64..5_000_000u64, // 0.0001 to 500.0000
        is_wto_member in any::<bool>()
    ) -> CalculationInput {
        input(
            Decimal::new(price_cents as i64, 2),
            Decimal::new(shipping_cents as i64, 2),
            Decimal::from(weight_grams),
            Decimal::new(rate_ten_thousandths as i64, 4),
            is_wto_member,
        )
    }
}

proptest! {
    #[test]
    fn test_total_is_exact_sum_of_components(input in any_input()) {
        let result = calculator().calculate(&input);
        prop_assert_eq!(
            result.total_amount_in_jpy,
            result.retail_price_in_jpy
                + result.customs_duty_in_jpy
                + result.tobacco_tax_in_jpy
                + result.consumption_tax_in_jpy
                + result.shipping_cost_in_jpy
        );
    }

    #[test]
    fn test_calculation_is_deterministic(input in any_input()) {
        let calc = calculator();
        prop_assert_eq!(calc.calculate(&input), calc.calculate(&input));
    }

    #[test]
    fn test_yen_amounts_are_whole(input in any_input()) {
        let result = calculator().calculate(&input);
        for amount in [
            result.retail_price_in_jpy,
            result.customs_duty_in_jpy,
            result.tobacco_tax_in_jpy,
            result.consumption_tax_in_jpy,
            result.shipping_cost_in_jpy,
            result.total_amount_in_jpy,
        ] {
            prop_assert!(amount.fract().is_zero(), "{} is not whole yen", amount);
            prop_assert!(amount >= Decimal::ZERO);
        }
    }

    #[test]
    fn test_exemption_applies_to_duty_and_consumption_tax_together(input in any_input()) {
        let result = calculator().calculate(&input);
        if result.taxable_price_in_jpy <= dec!(10000) {
            prop_assert!(result.is_exempt);
            prop_assert_eq!(result.customs_duty_in_jpy, Decimal::ZERO);
            prop_assert_eq!(result.consumption_tax_in_jpy, Decimal::ZERO);
        } else {
            prop_assert!(!result.is_exempt);
            // Smallest taxable base is 10,000 yen, so both taxes are positive
            prop_assert!(result.customs_duty_in_jpy > Decimal::ZERO);
            prop_assert!(result.consumption_tax_in_jpy > Decimal::ZERO);
        }
    }

    #[test]
    fn test_taxes_are_multiples_of_hundred(input in any_input()) {
        let result = calculator().calculate(&input);
        for tax in [
            result.customs_duty_in_jpy,
            result.tobacco_tax_in_jpy,
            result.consumption_tax_in_jpy,
        ] {
            prop_assert!((tax % dec!(100)).is_zero(), "{} is not a multiple of 100", tax);
        }
    }

    #[test]
    fn test_non_member_duty_is_never_lower(
        taxable in 0u64..100_000_000u64
    ) {
        let calc = calculator();
        let taxable = Decimal::new(taxable as i64, 2);
        prop_assert!(calc.tariff_in_jpy(taxable, false) >= calc.tariff_in_jpy(taxable, true));
    }

    #[test]
    fn test_pipeline_matches_individual_operations(input in any_input()) {
        let calc = calculator();
        let result = calc.calculate(&input);

        let taxable = calc.taxable_price_in_jpy(input.retail_price, input.exchange_rate_jpy_per_unit);
        let duty = calc.tariff_in_jpy(taxable, input.is_wto_member);
        let consumption = calc.consumption_tax_in_jpy(taxable, duty);

        prop_assert_eq!(result.taxable_price_in_jpy, taxable);
        prop_assert_eq!(result.customs_duty_in_jpy, duty);
        prop_assert_eq!(result.consumption_tax_in_jpy, consumption);
        prop_assert_eq!(result.tobacco_tax_in_jpy, calc.tobacco_tax_in_jpy(input.weight_grams));
    }
}

#[test]
fn test_exemption_boundary() {
    let calc = calculator();
    assert_eq!(calc.tariff_in_jpy(dec!(10000), true), Decimal::ZERO);
    assert_eq!(calc.consumption_tax_in_jpy(dec!(10000), dec!(0)), Decimal::ZERO);
    assert_eq!(calc.consumption_tax_in_jpy(dec!(10000), dec!(5000)), Decimal::ZERO);
    assert!(calc.tariff_in_jpy(dec!(10001), true) > Decimal::ZERO);
}

#[test]
fn test_exemption_uses_unrounded_taxable_price() {
    // 10,000.5 truncates to a 10,000 base but is above the threshold
    let calc = calculator();
    assert_eq!(calc.tariff_in_jpy(dec!(10000.5), true), dec!(2900));
    assert_eq!(calc.consumption_tax_in_jpy(dec!(10000.5), dec!(2900)), dec!(1200));
}

#[test]
fn test_scenario_exempt_shipment() {
    let result = calculator().calculate(&input(dec!(100), dec!(10), dec!(500), dec!(150), true));

    assert_eq!(result.taxable_price_in_jpy, dec!(9000));
    assert_eq!(result.customs_duty_in_jpy, dec!(0));
    assert_eq!(result.consumption_tax_in_jpy, dec!(0));
    assert_eq!(result.tobacco_tax_in_jpy, dec!(7600));
    assert_eq!(result.retail_price_in_jpy, dec!(15000));
    assert_eq!(result.shipping_cost_in_jpy, dec!(1500));
    assert_eq!(result.total_amount_in_jpy, dec!(24100));
}

#[test]
fn test_scenario_wto_member() {
    let result = calculator().calculate(&input(dec!(200), dec!(20), dec!(1000), dec!(150), true));

    assert_eq!(result.taxable_price_in_jpy, dec!(18000));
    assert_eq!(result.customs_duty_in_jpy, dec!(5300));
    assert_eq!(result.consumption_tax_in_jpy, dec!(2300));
    assert_eq!(result.tobacco_tax_in_jpy, dec!(15200));
    assert_eq!(result.retail_price_in_jpy, dec!(30000));
    assert_eq!(result.shipping_cost_in_jpy, dec!(3000));
    assert_eq!(result.total_amount_in_jpy, dec!(55800));
}

#[test]
fn test_scenario_non_member() {
    let result = calculator().calculate(&input(dec!(200), dec!(20), dec!(1000), dec!(150), false));

    assert_eq!(result.customs_duty_in_jpy, dec!(6300));
    assert_eq!(result.consumption_tax_in_jpy, dec!(2400));
    assert_eq!(result.tobacco_tax_in_jpy, dec!(15200));
    assert_eq!(result.total_amount_in_jpy, dec!(56900));
}

#[test]
fn test_zero_weight_has_no_tobacco_tax() {
    let result = calculator().calculate(&input(dec!(200), dec!(20), dec!(0), dec!(150), true));
    assert_eq!(result.tobacco_tax_in_jpy, dec!(0));
    assert_eq!(result.total_amount_in_jpy, dec!(40600));
}
