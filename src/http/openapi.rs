//! OpenAPI documentation.

use axum::Json;
use utoipa::OpenApi;

use crate::http::{handlers, response};

/// Path the OpenAPI document is served from.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// OpenAPI document for the helper service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Helper Service API",
        version = "v1",
        description = "API zum Testen von Helper-Endpunkten (z. B. Datumsumwandlung)",
        contact(name = "Helper Service Team")
    ),
    tags(
        (name = "helpers", description = "Helper-Endpunkte"),
        (name = "health", description = "Liveness probe")
    ),
    paths(handlers::convert_to_german_date, handlers::health_check),
    components(schemas(
        handlers::ConversionRequest,
        handlers::HealthResponse,
        response::ConversionResponse,
        response::ErrorBody,
        response::DateFormatErrorBody,
        response::ValidationErrorBody,
        response::FieldViolation,
    ))
)]
pub struct ApiDoc;

/// Serve the generated document.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_describes_conversion_endpoint() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        assert_eq!(doc["info"]["title"], "Helper Service API");
        assert_eq!(doc["info"]["version"], "v1");

        let op = &doc["paths"]["/api/helpers/date/german"]["post"];
        assert!(op["responses"].get("200").is_some());
        assert!(op["responses"].get("400").is_some());
        assert!(doc["components"]["schemas"].get("ConversionRequest").is_some());
    }
}
