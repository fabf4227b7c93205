//! HTTP request handlers.

use std::time::Instant;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::http::response::{ApiError, ConversionResponse, ErrorBody};
use crate::http::server::AppState;
use crate::http::validation::ValidatedJson;
use crate::observability::metrics;

/// Path of the conversion endpoint.
pub const CONVERT_PATH: &str = "/api/helpers/date/german";

/// Path of the liveness probe.
pub const HEALTH_PATH: &str = "/health";

/// Date conversion request.
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRequest {
    /// Beliebiges Datumsformat (z. B. 2026-02-09 oder 09.02.2026)
    #[validate(
        required(message = "dateValue darf nicht leer sein"),
        custom(function = "not_blank", message = "dateValue darf nicht leer sein")
    )]
    #[schema(value_type = String, example = "2026-02-09")]
    pub date_value: Option<String>,
}

fn not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        Err(validator::ValidationError::new("not_blank"))
    } else {
        Ok(())
    }
}

/// Liveness response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Convert a date string to `dd.MM.yyyy`.
#[utoipa::path(
    post,
    path = "/api/helpers/date/german",
    tag = "helpers",
    request_body = ConversionRequest,
    responses(
        (status = 200, description = "Datum umgewandelt", body = ConversionResponse),
        (status = 400, description = "Validierungsfehler oder ungültiges Datumsformat", body = ErrorBody)
    )
)]
pub async fn convert_to_german_date(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ConversionRequest>,
) -> Result<Json<ConversionResponse>, ApiError> {
    // Presence was checked by the extractor.
    let date_value = request.date_value.unwrap_or_default();
    let start = Instant::now();

    match state.converter.parse(&date_value) {
        Ok(parsed) => {
            metrics::record_conversion(true, parsed.strategy.name(), start);
            tracing::debug!(strategy = %parsed.strategy, date = %parsed.date, "Date converted");
            Ok(Json(ConversionResponse {
                german_date: parsed.to_german(),
                original_value: date_value,
            }))
        }
        Err(e) => {
            metrics::record_conversion(false, "none", start);
            tracing::info!(input = %e.input(), "Rejected unknown date format");
            Err(e.into())
        }
    }
}

/// Liveness check.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is running", body = HealthResponse))
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
