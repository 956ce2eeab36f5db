use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use super::domain::PropertyId;
use super::query::SearchQuery;
use super::repository::ListingRepository;
use super::service::{ListingService, ListingServiceError};

/// Router builder exposing the catalogue and contact endpoints.
pub fn listing_router<R>(service: Arc<ListingService<R>>) -> Router
where
    R: ListingRepository + 'static,
{
    Router::new()
        .route(
            "/api/properties",
            get(list_handler::<R>).post(create_property_handler::<R>),
        )
        .route("/api/properties/featured", get(featured_handler::<R>))
        .route("/api/properties/search", get(search_handler::<R>))
        .route("/api/properties/:property_id", get(property_handler::<R>))
        .route(
            "/api/contact",
            get(inquiries_handler::<R>).post(create_inquiry_handler::<R>),
        )
        .with_state(service)
}

pub(crate) fn error_response(error: ListingServiceError) -> Response {
    match error {
        ListingServiceError::Validation(error) => {
            let payload = json!({
                "error": error.to_string(),
                "fields": error.fields,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        ListingServiceError::Repository(error) => {
            tracing::warn!(%error, "listing repository failure");
            let payload = json!({ "error": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

fn respond<T: serde::Serialize>(
    status: StatusCode,
    result: Result<T, ListingServiceError>,
) -> Response {
    match result {
        Ok(body) => (status, Json(body)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_handler<R>(State(service): State<Arc<ListingService<R>>>) -> Response
where
    R: ListingRepository + 'static,
{
    respond(StatusCode::OK, service.properties())
}

pub(crate) async fn featured_handler<R>(State(service): State<Arc<ListingService<R>>>) -> Response
where
    R: ListingRepository + 'static,
{
    respond(StatusCode::OK, service.featured())
}

pub(crate) async fn search_handler<R>(
    State(service): State<Arc<ListingService<R>>>,
    Query(query): Query<SearchQuery>,
) -> Response
where
    R: ListingRepository + 'static,
{
    respond(StatusCode::OK, service.search_query(query))
}

pub(crate) async fn property_handler<R>(
    State(service): State<Arc<ListingService<R>>>,
    Path(property_id): Path<String>,
) -> Response
where
    R: ListingRepository + 'static,
{
    let Ok(id) = property_id.trim().parse::<u64>().map(PropertyId) else {
        let payload = json!({
            "error": "property id must be a positive integer",
            "id": property_id,
        });
        return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
    };

    match service.property(id) {
        Ok(Some(property)) => (StatusCode::OK, Json(property)).into_response(),
        Ok(None) => {
            let payload = json!({
                "error": "property not found",
                "id": id,
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn create_property_handler<R>(
    State(service): State<Arc<ListingService<R>>>,
    Json(payload): Json<Value>,
) -> Response
where
    R: ListingRepository + 'static,
{
    respond(StatusCode::CREATED, service.submit_property(&payload))
}

pub(crate) async fn create_inquiry_handler<R>(
    State(service): State<Arc<ListingService<R>>>,
    Json(payload): Json<Value>,
) -> Response
where
    R: ListingRepository + 'static,
{
    respond(StatusCode::CREATED, service.submit_inquiry(&payload))
}

pub(crate) async fn inquiries_handler<R>(State(service): State<Arc<ListingService<R>>>) -> Response
where
    R: ListingRepository + 'static,
{
    respond(StatusCode::OK, service.inquiries())
}
