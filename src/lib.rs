//! User Portal Library
//!
//! A web front-end for a remote REST API: one boot-time listing snapshot
//! rendered as HTML, and form-driven CRUD routes forwarded upstream.

pub mod config;
pub mod http;
pub mod observability;
pub mod render;
pub mod resource;
pub mod upstream;

pub use config::AppConfig;
pub use http::HttpServer;
pub use upstream::UpstreamClient;
