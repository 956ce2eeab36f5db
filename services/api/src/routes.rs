use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use realty::error::AppError;
use realty::finance::{calculate_emi, loan_terms_from_payload, EmiBreakdown};
use realty::listings::{listing_router, ListingRepository, ListingService};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

pub(crate) fn with_listing_routes<R>(service: Arc<ListingService<R>>) -> axum::Router
where
    R: ListingRepository + 'static,
{
    listing_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/emi", axum::routing::post(emi_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn emi_endpoint(
    Json(payload): Json<Value>,
) -> Result<Json<EmiBreakdown>, AppError> {
    let terms = loan_terms_from_payload(&payload)?;
    let breakdown = calculate_emi(terms)?;
    debug!(?terms, monthly = breakdown.monthly_installment, "emi calculated");
    Ok(Json(breakdown))
}
