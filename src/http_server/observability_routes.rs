//! Observability HTTP Routes
//!
//! Health check, request counters, and the middleware that feeds them.

use std::any::Any;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use uuid::Uuid;

use crate::observability::{log_event_with_fields, Event, MetricsRegistry};
use crate::rest_api::{ErrorCause, RestError, RouteName};

/// State behind `/health` and `/metrics`
pub struct ObservabilityState {
    pub metrics: Arc<MetricsRegistry>,
    pub countries: usize,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub countries: usize,
}

/// Create observability routes
pub fn observability_routes(state: Arc<ObservabilityState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}

async fn health_handler(State(state): State<Arc<ObservabilityState>>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        countries: state.countries,
    };

    (StatusCode::OK, Json(response))
}

async fn metrics_handler(State(state): State<Arc<ObservabilityState>>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.metrics.snapshot()))
}

/// Log every request and count it by status
///
/// One access line per request. Route name and failure cause are read from
/// response extensions set by the handlers.
pub async fn observe_request(
    State(metrics): State<Arc<MetricsRegistry>>,
    request: Request,
    next: Next,
) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    metrics.record_status(status);

    let mut fields = vec![
        ("request_id", request_id),
        ("method", method),
        ("path", path),
        ("status", status.to_string()),
        ("duration_us", started.elapsed().as_micros().to_string()),
    ];
    fields.extend(response_fields(&response));

    let fields: Vec<(&str, &str)> = fields.iter().map(|(k, v)| (*k, v.as_str())).collect();
    log_event_with_fields(Event::for_status(status), &fields);

    response
}

/// Access log fields carried by the response itself
fn response_fields(response: &Response) -> Vec<(&'static str, String)> {
    let mut fields = Vec::new();
    if let Some(RouteName(route)) = response.extensions().get::<RouteName>() {
        fields.push(("route", route.to_string()));
    }
    if let Some(ErrorCause(cause)) = response.extensions().get::<ErrorCause>() {
        fields.push(("cause", cause.clone()));
    }
    fields
}

/// Turn a handler panic into the generic 500 body
///
/// The panic message becomes the response's [`ErrorCause`] and is logged on
/// the access line.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");

    RestError::Internal(format!("handler panicked: {detail}")).into_response()
}
