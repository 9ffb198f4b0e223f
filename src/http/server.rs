//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Wire up middleware (tracing, request timeout, request ID, metrics)
//! - Inject the upstream client and the boot snapshot as shared state
//! - Serve with graceful shutdown

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{delete, get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::http::handlers;
use crate::http::request::RequestIdLayer;
use crate::observability::metrics;
use crate::resource::UserRecord;
use crate::upstream::UpstreamClient;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<UpstreamClient>,

    /// Boot-time listing snapshot; read-only for the process lifetime.
    pub users: Arc<Vec<UserRecord>>,
}

/// HTTP server for the portal.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server from configuration, the shared upstream
    /// client, and the boot-time listing snapshot.
    pub fn new(
        config: &AppConfig,
        upstream: Arc<UpstreamClient>,
        snapshot: Vec<UserRecord>,
    ) -> Self {
        let state = AppState {
            upstream,
            users: Arc::new(snapshot),
        };
        let router = Self::build_router(config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        Router::new()
            .route("/", get(handlers::index))
            .route("/healthz", get(handlers::healthz))
            .route("/users", post(handlers::create_user))
            .route("/posts", post(handlers::create_post))
            .route(
                "/users/update",
                post(handlers::update_user).put(handlers::update_user),
            )
            .route("/users/{id}", delete(handlers::delete_user))
            .with_state(state)
            .layer(middleware::from_fn(track_requests))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Record one metrics sample per handled request, whatever its outcome.
async fn track_requests(req: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let response = next.run(req).await;
    metrics::record_request(method.as_str(), response.status().as_u16(), started);
    response
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
