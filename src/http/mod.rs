//! HTTP surface of the portal.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (assign request ID)
//!     → handlers.rs (validate, map fields, call upstream)
//!     → error.rs (failure → HTTP status for the caller)
//! ```

pub mod error;
pub mod handlers;
pub mod request;
pub mod server;

pub use error::GatewayError;
pub use request::{RequestId, RequestIdLayer, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
