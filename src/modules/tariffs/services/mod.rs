pub mod tariff_calculator;
pub mod tariff_service;

pub use tariff_calculator::TariffCalculator;
pub use tariff_service::{Quote, TariffService};
