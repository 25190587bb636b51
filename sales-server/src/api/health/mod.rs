//! Health check and API index
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api | GET | Endpoint index |
//! | /api/health | GET | Liveness plus database round-trip |
//!
//! ```json
//! { "status": "ok", "database": "connected", "environment": "development" }
//! ```

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api", get(index))
        .route("/api/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// ok | degraded
    pub status: &'static str,
    /// connected | disconnected
    pub database: &'static str,
    pub environment: String,
}

/// GET /api/health
///
/// 503 with `degraded` when the database does not answer.
pub async fn health(State(state): State<ServerState>) -> (StatusCode, Json<HealthResponse>) {
    let (code, status, database) = match state.db.ping().await {
        Ok(()) => (StatusCode::OK, "ok", "connected"),
        Err(e) => {
            tracing::error!(error = %e, "Health check database ping failed");
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "disconnected")
        }
    };

    (
        code,
        Json(HealthResponse {
            status,
            database,
            environment: state.config.environment.clone(),
        }),
    )
}

#[derive(Debug, Serialize)]
pub struct ApiIndex {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: Endpoints,
}

#[derive(Debug, Serialize)]
pub struct Endpoints {
    pub health: &'static str,
    pub sales: &'static str,
    pub filters: &'static str,
    pub summary: &'static str,
}

/// GET /api
pub async fn index() -> Json<ApiIndex> {
    Json(ApiIndex {
        message: "Retail Sales Management System API",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: Endpoints {
            health: "/api/health",
            sales: "/api/sales",
            filters: "/api/sales/filters",
            summary: "/api/sales/summary",
        },
    })
}
