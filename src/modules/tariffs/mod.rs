pub mod controllers;
pub mod models;
pub mod services;

pub use models::{CalculationInput, CalculationResult, TaxRates};
pub use services::{TariffCalculator, TariffService};
