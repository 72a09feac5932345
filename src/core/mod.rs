pub mod currency;
pub mod error;
pub mod rounding;

pub use currency::Currency;
pub use error::{AppError, Result};
