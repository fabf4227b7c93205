//! Date conversion subsystem.
//!
//! # Data Flow
//! ```text
//! raw string
//!     → strategy.rs (ordered, strict parsers; first match wins)
//!     → NaiveDate (time of day and zone discarded)
//!     → service.rs (dd.MM.yyyy formatting)
//! ```
//!
//! # Design Decisions
//! - Strategies are a closed enum tried in a fixed order
//! - Parsing is whole-string and strict; a failed strategy falls through silently
//! - The service holds no mutable state and is shared across requests

pub mod error;
pub mod service;
pub mod strategy;

pub use error::{ConversionResult, DateFormatError};
pub use service::{format_german, DateConversionService, ParsedDate, GERMAN_DATE_FORMAT};
pub use strategy::ParseStrategy;
