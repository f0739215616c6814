//! HTTP API server.
//!
//! Routes:
//! - `POST /api/analyze` - analyze a URL and persist the report
//! - `GET /api/reports` - list the calling user's reports, newest first
//! - `GET /api/reports/{id}` - fetch one report (owner only)
//! - `DELETE /api/reports/{id}` - delete one report (owner only)

mod auth;
mod handlers;
mod types;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use sqlx::SqlitePool;

use crate::analyzer::Auditor;

pub use auth::{UserId, USER_ID_HEADER};

/// Shared state for all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: Arc<SqlitePool>,
    /// The analysis engine.
    pub auditor: Auditor,
}

/// Builds the API router over the given state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/analyze", post(handlers::analyze_handler))
        .route("/api/reports", get(handlers::list_reports_handler))
        .route(
            "/api/reports/{id}",
            get(handlers::get_report_handler).delete(handlers::delete_report_handler),
        )
        .with_state(state)
}

/// Binds the listener and serves the API until the process exits.
pub async fn start_server(bind: &str, state: AppState) -> Result<(), anyhow::Error> {
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind API server to {}: {}", bind, e))?;

    log::info!("API server listening on http://{bind}/");
    log::info!("  - Analyze: POST http://{bind}/api/analyze");
    log::info!("  - Reports: GET http://{bind}/api/reports");

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("API server error: {}", e))?;

    Ok(())
}
