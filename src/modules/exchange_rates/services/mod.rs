pub mod exchange_rate_api;
pub mod rate_provider;

pub use exchange_rate_api::ExchangeRateApiClient;
pub use rate_provider::ExchangeRateProvider;
