pub mod rate_table;

pub use rate_table::{RateTable, TARGET_CURRENCY};
