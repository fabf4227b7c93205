//! German date helper service library.
//!
//! Converts free-form date strings (ISO dates, German dates, ISO date-times
//! with or without offset or zone, UTC instants) to `dd.MM.yyyy` and exposes
//! the conversion over HTTP.

pub mod config;
pub mod conversion;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::ServiceConfig;
pub use conversion::{DateConversionService, DateFormatError, ParseStrategy};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
