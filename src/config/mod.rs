use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;

pub mod server;

pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub exchange_rate: ExchangeRateConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

impl AppConfig {
    /// Tracing filter used when `RUST_LOG` is not set
    pub fn default_log_filter(&self) -> String {
        format!("shisha_tariff={},actix_web=info", self.log_level)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeRateConfig {
    /// Optional so the server still starts; lookups fail until it is set
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            server: ServerConfig::from_env()?,
            exchange_rate: ExchangeRateConfig {
                api_key: env::var("EXCHANGE_RATE_API_KEY").ok(),
                base_url: env::var("EXCHANGE_RATE_BASE_URL")
                    .unwrap_or_else(|_| "https://v6.exchangerate-api.com".to_string()),
                timeout_secs: env::var("EXCHANGE_RATE_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::Configuration("Invalid EXCHANGE_RATE_TIMEOUT_SECS".to_string())
                    })?,
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.server.validate()?;

        if self.exchange_rate.timeout_secs == 0 {
            return Err(AppError::Configuration(
                "Exchange rate timeout must be greater than 0".to_string(),
            ));
        }

        if self.exchange_rate.base_url.trim().is_empty() {
            return Err(AppError::Configuration(
                "EXCHANGE_RATE_BASE_URL cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    pub fn has_exchange_rate_key(&self) -> bool {
        self.exchange_rate
            .api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }
}
