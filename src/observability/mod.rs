//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! handlers and client produce:
//!     → logging.rs (structured log events, request IDs in fields)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout (tracing fmt layer)
//!     → Prometheus scrape of the metrics listener
//! ```

pub mod logging;
pub mod metrics;
