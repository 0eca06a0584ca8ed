// HTTP request handlers
use crate::infrastructure::chunked_json::{ndjson_response, snapshot_stream};
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use crate::presentation::views::{AqiLookup, DashboardSummary};
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Current dataset snapshot
pub async fn get_dashboard(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let Some(dataset) = state.store.current().await else {
        tracing::warn!("Dashboard requested before the first dataset was generated");
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    };

    match json_response(dataset.as_ref(), accepts_brotli(&headers)).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Ranked locations and the newest trend point
pub async fn get_summary(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let Some(dataset) = state.store.current().await else {
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    };

    let summary = DashboardSummary::new(&dataset, state.refresh_interval.as_secs());
    match json_response(&summary, accepts_brotli(&headers)).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Live feed: one JSON line per refresh
pub async fn stream_dashboard(State(state): State<Arc<AppState>>) -> Response {
    let stream = snapshot_stream(state.store.subscribe());
    match ndjson_response(stream) {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Classify an arbitrary AQI value
pub async fn aqi_lookup(Path(aqi): Path<f64>) -> Json<AqiLookup> {
    Json(AqiLookup::new(aqi))
}
