//! Metrics collection and exposition.
//!
//! # Metrics
//! - `portal_requests_total` (counter): handled requests by method, status
//! - `portal_request_duration_seconds` (histogram): latency by method

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on its own listener.
///
/// Failure to install is logged and otherwise ignored; the portal serves
/// traffic without metrics rather than refusing to start.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            describe_counter!(
                "portal_requests_total",
                "Handled requests by method and status"
            );
            describe_histogram!(
                "portal_request_duration_seconds",
                "Request latency by method"
            );
            tracing::info!(address = %addr, "metrics exporter listening");
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to install metrics exporter");
        }
    }
}

/// Record one handled request.
pub fn record_request(method: &str, status: u16, started: Instant) {
    let elapsed = started.elapsed().as_secs_f64();
    counter!(
        "portal_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("portal_request_duration_seconds", "method" => method.to_string())
        .record(elapsed);
}
