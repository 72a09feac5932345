use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::tariffs::models::{CalculationRequest, TaxRates};
use crate::modules::tariffs::services::TariffService;

/// Calculate the landed cost of one product
/// POST /api/calculations
pub async fn create_calculation(
    service: web::Data<Arc<TariffService>>,
    request: web::Json<CalculationRequest>,
) -> Result<HttpResponse, AppError> {
    let quote = service.quote(&request.into_inner()).await?;

    Ok(HttpResponse::Ok().json(quote))
}

/// Current rate table
/// GET /api/tax-rates
pub async fn get_tax_rates(service: web::Data<Arc<TariffService>>) -> HttpResponse {
    let rates: &TaxRates = service.calculator().rates();
    HttpResponse::Ok().json(rates)
}

/// Configure tariff routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/calculations", web::post().to(create_calculation))
        .route("/tax-rates", web::get().to(get_tax_rates));
}
