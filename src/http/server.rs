//! HTTP server setup and the metrics relay handler.
//!
//! # Responsibilities
//! - Create Axum Router with the single /metrics route
//! - Wire up middleware (tracing, request ID)
//! - Bind server to listener with graceful shutdown
//! - Map collector results to HTTP responses

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::collector;
use crate::config::{CollectorConfig, ExporterConfig};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub collector: Arc<CollectorConfig>,
}

/// HTTP server for the exporter.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ExporterConfig) -> Self {
        let state = AppState {
            collector: Arc::new(config.collector),
        };

        let router = Self::build_router(state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// No request timeout layer: a hung collector holds its request
    /// open until the collector-level timeout fires, if one is set.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/metrics", get(metrics_handler))
            .with_state(state)
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener
    /// until the shutdown channel fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Relay handler for `GET /metrics`.
///
/// Ignores everything about the request, runs the collector, and
/// returns its stdout untouched. Every failure mode maps to a bare
/// 500; the cause goes to the logs, never to the client.
async fn metrics_handler(State(state): State<AppState>) -> Response {
    match collector::run(&state.collector).await {
        Ok(stdout) => (StatusCode::OK, stdout).into_response(),
        Err(e) => {
            tracing::error!(
                collector = %state.collector.command,
                error = %e,
                "Collector invocation failed"
            );
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
