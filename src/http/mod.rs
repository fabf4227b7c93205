//! HTTP boundary subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, trace span)
//!     → validation.rs (decode + non-blank check)
//!     → handlers.rs (invoke conversion service)
//!     → response.rs (success body or mapped error)
//!     → Send to client
//! ```

pub mod handlers;
pub mod openapi;
pub mod request;
pub mod response;
pub mod server;
pub mod validation;

pub use handlers::{ConversionRequest, CONVERT_PATH, HEALTH_PATH};
pub use request::X_REQUEST_ID;
pub use response::{ApiError, ConversionResponse, DateFormatErrorBody, ErrorBody, ValidationErrorBody};
pub use server::{AppState, HttpServer};
