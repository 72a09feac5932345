//! Statutory rounding primitives.
//!
//! Japanese customs practice discards fractions below a unit (1,000 yen for
//! tax bases, 100 yen for tax amounts). Every helper here truncates toward
//! zero on exact decimals; nothing ever rounds to nearest or up.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Unit a customs tax base is truncated to.
pub const TARIFF_BASE_UNIT: Decimal = dec!(1000);

/// Unit a computed tax amount is truncated to.
pub const TAX_UNIT: Decimal = dec!(100);

/// Floor `amount` to a multiple of `unit`.
///
/// For `amount >= 0` the result is `unit * floor(amount / unit)`: never above
/// `amount`, always a multiple of `unit`, and less than one `unit` below it.
/// `unit` must be positive.
pub fn round_down_to(amount: Decimal, unit: Decimal) -> Decimal {
    debug_assert!(unit > Decimal::ZERO, "rounding unit must be positive");
    (amount / unit).floor() * unit
}

/// Convert a source-currency amount to whole yen, discarding the fraction.
pub fn convert_to_jpy(amount: Decimal, exchange_rate: Decimal) -> Decimal {
    (amount * exchange_rate).floor()
}

/// De-minimis check shared by customs duty and consumption tax.
///
/// Inclusive: a taxable price of exactly `threshold` is exempt.
pub fn is_de_minimis(taxable_price: Decimal, threshold: Decimal) -> bool {
    taxable_price <= threshold
}
