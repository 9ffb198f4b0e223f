//! Upstream API client subsystem.
//!
//! # Data Flow
//! ```text
//! forwarding handler
//!     → client.rs (build request: method, URL, payload, fixed headers)
//!     → upstream REST API
//!     → types.rs (status + body bytes; 200-only success helper)
//! ```
//!
//! # Design Decisions
//! - One outbound call per inbound request; no retries, no caching
//! - Timeouts are explicit and come from configuration
//! - The client never reinterprets response bodies; the status code alone
//!   decides success

pub mod client;
pub mod types;

pub use client::UpstreamClient;
pub use types::{UpstreamError, UpstreamResponse, UpstreamResult};
