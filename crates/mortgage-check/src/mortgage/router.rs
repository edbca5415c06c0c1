use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::error::AppError;

use super::domain::{InterestRate, MortgageOutcome, MortgageRequest};
use super::rates::RateSource;
use super::service::MortgageCheckService;

/// Router builder exposing the rate table and the affordability check.
pub fn mortgage_router<S>(service: Arc<MortgageCheckService<S>>) -> Router
where
    S: RateSource + 'static,
{
    Router::new()
        .route("/api/v1/interest-rates", get(rates_handler::<S>))
        .route("/api/v1/interest-rates/reload", post(reload_handler::<S>))
        .route("/api/v1/mortgage-check", post(check_handler::<S>))
        .with_state(service)
}

pub(crate) async fn rates_handler<S>(
    State(service): State<Arc<MortgageCheckService<S>>>,
) -> Json<Vec<InterestRate>>
where
    S: RateSource + 'static,
{
    Json(service.interest_rates())
}

pub(crate) async fn check_handler<S>(
    State(service): State<Arc<MortgageCheckService<S>>>,
    Json(request): Json<MortgageRequest>,
) -> Json<MortgageOutcome>
where
    S: RateSource + 'static,
{
    Json(service.check(&request))
}

pub(crate) async fn reload_handler<S>(
    State(service): State<Arc<MortgageCheckService<S>>>,
) -> Result<Json<Value>, AppError>
where
    S: RateSource + 'static,
{
    let count = service.reload()?;
    Ok(Json(json!({ "rates": count })))
}
