pub mod exchange_rate_controller;

pub use exchange_rate_controller::configure;
