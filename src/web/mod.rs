//! HTTP surface: serves the rendered components and the i18n endpoints.

pub mod handlers;
mod state;

pub use state::AppState;

use anyhow::{Context, Result};
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/", get(handlers::sources_page))
        .route("/sources", get(handlers::sources_page))
        .route("/api/sources", get(handlers::api_sources))
        .route("/api/language", get(handlers::api_language))
        .route("/language", post(handlers::set_language))
        .route("/theme", post(handlers::toggle_theme))
        .route("/render/analysis", post(handlers::render_analysis))
        .route("/api/i18n/catalog", get(handlers::catalog))
        .route("/api/i18n/metrics", get(handlers::metrics))
        .route("/api/i18n/validation", get(handlers::validation))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .await
        .context("Server error")
}
