// Integration tests for the ExchangeRate-API client
//
// Spawns a fake upstream with actix-test and drives the real reqwest client
// against it:
// - success bodies become a rate table with an exact JPY rate
// - non-success status, "result": "error" bodies and unreachable hosts all
//   surface as RateUnavailable
// - a missing credential never reaches the network

use std::time::Duration;

use actix_web::{web, App, HttpResponse};
use rust_decimal_macros::dec;
use serde_json::json;
use shisha_tariff::core::{AppError, Currency};
use shisha_tariff::exchange_rates::{ExchangeRateApiClient, ExchangeRateProvider};

const VALID_KEY: &str = "test-key";

async fn latest(path: web::Path<(String, String)>) -> HttpResponse {
    let (key, currency) = path.into_inner();

    if key != VALID_KEY {
        return HttpResponse::Forbidden().json(json!({
            "result": "error",
            "error-type": "invalid-key"
        }));
    }

    match currency.as_str() {
        "USD" => HttpResponse::Ok()
            .content_type("application/json")
            .body(r#"{"result":"success","base_code":"USD","conversion_rates":{"USD":1,"EUR":0.9213,"JPY":151.2345}}"#),
        "EUR" => HttpResponse::Ok().json(json!({
            "result": "error",
            "error-type": "quota-reached"
        })),
        _ => HttpResponse::NotFound().finish(),
    }
}

fn spawn_upstream() -> actix_test::TestServer {
    actix_test::start(|| App::new().route("/v6/{key}/latest/{currency}", web::get().to(latest)))
}

fn client(server: &actix_test::TestServer, key: Option<&str>) -> ExchangeRateApiClient {
    ExchangeRateApiClient::new(
        key.map(str::to_string),
        server.url(""),
        Duration::from_secs(5),
    )
    .unwrap()
}

#[actix_web::test]
async fn test_fetch_rates_success() {
    let server = spawn_upstream();
    let client = client(&server, Some(VALID_KEY));

    let table = client.fetch_rates(Currency::USD).await.unwrap();

    assert_eq!(table.base_code, Currency::USD);
    assert_eq!(table.jpy_rate().unwrap(), dec!(151.2345));
    assert_eq!(table.conversion_rates.get("EUR").copied(), Some(dec!(0.9213)));
}

#[actix_web::test]
async fn test_invalid_key_is_rate_unavailable() {
    let server = spawn_upstream();
    let client = client(&server, Some("wrong-key"));

    let err = client.fetch_rates(Currency::USD).await.unwrap_err();

    assert!(matches!(err, AppError::RateUnavailable(_)));
    assert!(err.to_string().contains("403"));
}

#[actix_web::test]
async fn test_error_result_is_rate_unavailable() {
    let server = spawn_upstream();
    let client = client(&server, Some(VALID_KEY));

    let err = client.fetch_rates(Currency::EUR).await.unwrap_err();

    assert!(matches!(err, AppError::RateUnavailable(_)));
    assert!(err.to_string().contains("quota-reached"));
}

#[actix_web::test]
async fn test_missing_credential_is_rate_unavailable() {
    let server = spawn_upstream();
    let client = client(&server, None);

    let err = client.fetch_rates(Currency::USD).await.unwrap_err();
    assert!(matches!(err, AppError::RateUnavailable(_)));
}

#[actix_web::test]
async fn test_unreachable_upstream_is_rate_unavailable() {
    // Nothing listens on port 9 (discard) in the test environment
    let client = ExchangeRateApiClient::new(
        Some(VALID_KEY.to_string()),
        "http://127.0.0.1:9".to_string(),
        Duration::from_secs(2),
    )
    .unwrap();

    let err = client.fetch_rates(Currency::USD).await.unwrap_err();
    assert!(matches!(err, AppError::RateUnavailable(_)));
    assert!(!err.to_string().contains(VALID_KEY));
}
