//! Metrics collection and exposition.
//!
//! # Metrics
//! - `date_conversions_total` (counter): conversions by outcome and strategy
//! - `date_conversion_duration_seconds` (histogram): time spent parsing
//! - `http_validation_failures_total` (counter): rejected request bodies

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one conversion attempt.
///
/// `strategy` is the matching strategy name, or `"none"` on failure.
pub fn record_conversion(success: bool, strategy: &'static str, start: Instant) {
    let outcome = if success { "success" } else { "format_error" };
    metrics::counter!("date_conversions_total", "outcome" => outcome, "strategy" => strategy)
        .increment(1);
    metrics::histogram!("date_conversion_duration_seconds", "outcome" => outcome)
        .record(start.elapsed().as_secs_f64());
}

/// Record a request body rejected before conversion.
pub fn record_validation_failure() {
    metrics::counter!("http_validation_failures_total").increment(1);
}
