//! Shisha Tariff Calculator
//!
//! Computes the landed cost in yen of importing a shisha product into Japan:
//! customs duty, tobacco excise and consumption tax on top of the converted
//! retail price and shipping.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::exchange_rates;
pub use modules::tariffs;

use actix_web::web;

use crate::core::AppError;

/// Mount every HTTP route of the service
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Malformed bodies and query strings get the same error envelope as InvalidInput
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| AppError::invalid_input(err.to_string()).into());
    let query_config = web::QueryConfig::default()
        .error_handler(|err, _req| AppError::invalid_input(err.to_string()).into());

    cfg.configure(modules::health::controllers::configure).service(
        web::scope("/api")
            .app_data(json_config)
            .app_data(query_config)
            .configure(modules::tariffs::controllers::configure)
            .configure(modules::exchange_rates::controllers::configure),
    );
}
