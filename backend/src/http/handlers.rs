//! HTTP handlers for the REST API.

use std::any::Any;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{Map, Value};

use super::dto::{CalculateSunResponse, EphemerisStatus, HealthResponse};
use super::error::AppError;
use super::state::AppState;
use crate::ephemeris::EphemerisConfig;
use crate::models::DateSpec;
use crate::services::solar;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /
///
/// Plain-text liveness message.
pub async fn root() -> &'static str {
    "Swiss Ephemeris API is running!"
}

/// GET /health
///
/// Reports service status and the configured ephemeris backend.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let data_path = state.ephemeris.data_path().to_path_buf();
    let data_files_present = EphemerisConfig::new(data_path.clone()).data_files_present();

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        ephemeris: EphemerisStatus {
            backend: state.ephemeris.name().to_string(),
            data_path: data_path.display().to_string(),
            data_files_present,
        },
    })
}

/// POST /calculate-sun
///
/// Compute the Sun's ecliptic longitude, latitude and speed for a date.
pub async fn calculate_sun(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> HandlerResult<CalculateSunResponse> {
    let body = if is_json_content(&headers) {
        parse_body(&body)?
    } else {
        Value::Object(Map::new())
    };
    let date = DateSpec::from_json(&body)?;

    // The computation is CPU-bound; keep it off the async workers.
    let ephemeris = state.ephemeris.clone();
    let task = tokio::task::spawn_blocking(move || solar::compute_sun_position(ephemeris.as_ref(), &date));

    let sun = tokio::time::timeout(state.computation_timeout, task)
        .await
        .map_err(|_| {
            AppError::Internal(format!(
                "Computation exceeded {} ms",
                state.computation_timeout.as_millis()
            ))
        })???;

    Ok(Json(CalculateSunResponse { date, sun }))
}

/// Whether the request declares a JSON body (`application/json` or a `+json` type).
/// Other bodies are ignored and read as an empty object.
fn is_json_content(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
        })
        .unwrap_or(false)
}

/// Decode a request body. An empty body is an empty object.
fn parse_body(body: &[u8]) -> Result<Value, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_slice(body)
        .map_err(|e| AppError::BadRequest(format!("Malformed JSON request body: {}", e)))
}

/// Turn a handler panic into the generic internal error response.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::Internal(format!("Handler panicked: {}", detail)).into_response()
}
