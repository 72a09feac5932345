pub mod breakdown;
pub mod calculation;
pub mod request;
pub mod tax_rates;

pub use breakdown::{BreakdownLine, CalculationBreakdown, LineKind};
pub use calculation::{CalculationInput, CalculationResult};
pub use request::{CalculationRequest, ParsedRequest};
pub use tax_rates::TaxRates;
