//! Response bodies and error mapping.
//!
//! # Responsibilities
//! - Define the JSON bodies returned by the conversion endpoint
//! - Map request-level errors to status codes and bodies
//!
//! # Design Decisions
//! - Validation failures and unknown date formats are both 400, but carry
//!   differently shaped bodies so clients can tell them apart
//! - Messages are German, matching the service's audience

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::conversion::DateFormatError;
use crate::observability::metrics;

/// `error` value for unparseable dates.
pub const DATE_FORMAT_ERROR: &str = "Ungültiges Datumsformat";

/// `detail` value for unparseable dates.
pub const DATE_FORMAT_DETAIL: &str = "Erlaubt sind z. B. 2026-02-09, 09.02.2026 oder ISO-Datetime";

/// `error` value for rejected request bodies.
pub const VALIDATION_ERROR: &str = "Validierungsfehler";

/// `code` value for rejected request bodies.
pub const VALIDATION_ERROR_CODE: &str = "validation_error";

/// Successful conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResponse {
    /// The `dateValue` exactly as received.
    #[schema(example = "2026-02-09")]
    pub original_value: String,
    /// The date as `dd.MM.yyyy`.
    #[schema(example = "09.02.2026")]
    pub german_date: String,
}

/// Body for a value no parse strategy accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DateFormatErrorBody {
    #[schema(example = "Ungültiges Datumsformat")]
    pub error: String,
    #[schema(example = "Erlaubt sind z. B. 2026-02-09, 09.02.2026 oder ISO-Datetime")]
    pub detail: String,
}

/// A constraint violated by one request field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldViolation {
    #[schema(example = "dateValue")]
    pub field: String,
    #[schema(example = "dateValue darf nicht leer sein")]
    pub message: String,
}

/// Body for a request rejected before conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorBody {
    pub error: String,
    pub code: String,
    pub violations: Vec<FieldViolation>,
}

/// Any 400 body returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ErrorBody {
    Validation(ValidationErrorBody),
    DateFormat(DateFormatErrorBody),
}

/// Request-level API error.
#[derive(Debug, Error)]
pub enum ApiError {
    /// One or more fields violated their constraints.
    #[error("Validation failed: {}", describe(.0))]
    Validation(Vec<FieldViolation>),

    /// The body could not be decoded at all.
    #[error("Malformed request body: {message}")]
    Malformed { status: StatusCode, message: String },

    /// No parse strategy accepted the value.
    #[error(transparent)]
    DateFormat(#[from] DateFormatError),
}

fn describe(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::DateFormat(_) => StatusCode::BAD_REQUEST,
            Self::Malformed { status, .. } => *status,
        }
    }

    pub fn body(&self) -> ErrorBody {
        match self {
            Self::Validation(violations) => ErrorBody::Validation(ValidationErrorBody {
                error: VALIDATION_ERROR.to_string(),
                code: VALIDATION_ERROR_CODE.to_string(),
                violations: violations.clone(),
            }),
            Self::Malformed { message, .. } => ErrorBody::Validation(ValidationErrorBody {
                error: message.clone(),
                code: VALIDATION_ERROR_CODE.to_string(),
                violations: Vec::new(),
            }),
            Self::DateFormat(_) => ErrorBody::DateFormat(DateFormatErrorBody {
                error: DATE_FORMAT_ERROR.to_string(),
                detail: DATE_FORMAT_DETAIL.to_string(),
            }),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if !matches!(self, Self::DateFormat(_)) {
            metrics::record_validation_failure();
        }
        (self.status(), Json(self.body())).into_response()
    }
}
