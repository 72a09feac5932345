//! Exchange rate controller for HTTP endpoints
//!
//! Exposes the upstream rate table so a form can show the rate a
//! calculation will use before it is submitted.

use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::{AppError, Currency};
use crate::modules::exchange_rates::services::ExchangeRateProvider;

/// Query parameters for the rate lookup
#[derive(Debug, Deserialize)]
pub struct ExchangeRateQuery {
    #[serde(default)]
    pub currency: Option<String>,
}

impl ExchangeRateQuery {
    fn currency(&self) -> Result<Currency, AppError> {
        match self.currency.as_deref().map(str::trim) {
            None | Some("") => Ok(Currency::default()),
            Some(code) => code.parse().map_err(AppError::InvalidInput),
        }
    }
}

/// Get the latest rates for a source currency
/// GET /api/exchange-rate?currency=USD
pub async fn get_exchange_rate(
    provider: web::Data<Arc<dyn ExchangeRateProvider>>,
    query: web::Query<ExchangeRateQuery>,
) -> Result<HttpResponse, AppError> {
    let currency = query.currency()?;
    let table = provider.fetch_rates(currency).await?;

    Ok(HttpResponse::Ok().json(table))
}

/// Configure exchange rate routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/exchange-rate", web::get().to(get_exchange_rate));
}
