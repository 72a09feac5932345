use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use shisha_tariff::config::Config;
use shisha_tariff::configure_routes;
use shisha_tariff::exchange_rates::{ExchangeRateApiClient, ExchangeRateProvider};
use shisha_tariff::middleware::RequestId;
use shisha_tariff::tariffs::{TariffCalculator, TariffService, TaxRates};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load configuration before tracing so the log level and format come from it
    let config = Config::from_env().map_err(std::io::Error::other)?;
    config.validate().map_err(std::io::Error::other)?;

    // Initialize tracing; JSON lines in production, human-readable otherwise
    let json_logs = config.app.env == "production";
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.app.default_log_filter().into()),
        )
        .with((!json_logs).then(tracing_subscriber::fmt::layer))
        .with(json_logs.then(|| tracing_subscriber::fmt::layer().json()))
        .init();

    tracing::info!("Starting Shisha Tariff Calculator");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    if !config.has_exchange_rate_key() {
        tracing::warn!("EXCHANGE_RATE_API_KEY is not set; every calculation will fail until it is");
    }

    let rates = TaxRates::default();
    rates.validate().map_err(std::io::Error::other)?;

    let provider: Arc<dyn ExchangeRateProvider> = Arc::new(
        ExchangeRateApiClient::from_config(&config.exchange_rate).map_err(std::io::Error::other)?,
    );
    let service = Arc::new(TariffService::new(
        TariffCalculator::new(rates),
        provider.clone(),
    ));

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(service.clone()))
            .app_data(web::Data::new(provider.clone()))
            .configure(configure_routes)
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}
