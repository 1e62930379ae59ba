//! HTTP server for jeed

use crate::config::Config;
use crate::metrics::SolverMetrics;
use crate::middleware::{self, MAX_BODY_SIZE};
use crate::routes;
use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use axum::Router;
use chrono::{DateTime, Utc};
use jee_common::Solver;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers. Read-only after startup.
pub struct AppState {
    pub solver: Solver,
    pub metrics: SolverMetrics,
    pub start_time: Instant,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(solver: Solver) -> Result<Self> {
        Ok(Self {
            solver,
            metrics: SolverMetrics::new().context("registering metrics")?,
            start_time: Instant::now(),
            started_at: Utc::now(),
        })
    }
}

/// Build the router with all routes and middleware
pub fn router(state: Arc<AppState>, request_timeout: Duration) -> Router {
    let routes = Router::new()
        .merge(routes::page_routes())
        .merge(routes::solve_routes())
        .merge(routes::info_routes())
        .merge(routes::metrics_routes())
        .fallback(routes::not_found)
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .with_state(state);
    with_layers(routes, request_timeout)
}

/// Wrap a router in the server's middleware stack, outermost first
pub fn with_layers(router: Router, request_timeout: Duration) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(axum::middleware::from_fn(middleware::request_id))
            .layer(CatchPanicLayer::custom(middleware::panic_response))
            .layer(axum::middleware::map_response(middleware::timeout_response))
            .layer(TimeoutLayer::new(request_timeout))
            .layer(CorsLayer::permissive())
            .layer(axum::middleware::from_fn(middleware::body_size_limit)),
    )
}

/// Run the HTTP server until Ctrl-C
pub async fn run(state: AppState, config: &Config) -> Result<()> {
    let app = router(
        Arc::new(state),
        Duration::from_secs(config.server.request_timeout_secs),
    );

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!("  Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Shutting down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}
