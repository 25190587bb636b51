//! API routes
//!
//! # Structure
//!
//! - [`health`] - health check and API index
//! - [`sales`] - transaction listing, filter options and summary

pub mod health;
pub mod sales;

use axum::Router;
use http::{HeaderName, HeaderValue};
use shared::AppError;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// UUID v4 request ids
#[derive(Clone, Copy, Default)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(sales::router())
}

/// Build the fully configured application
///
/// Used by the HTTP server and by the integration tests.
pub fn build_app(state: ServerState) -> Router {
    build_router()
        .fallback(not_found)
        // CORS - the dashboard is served from another origin
        .layer(CorsLayer::permissive())
        // Compression - gzip responses when accepted
        .layer(CompressionLayer::new())
        // Trace - request spans at INFO
        .layer(TraceLayer::new_for_http())
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        // Request ID - outermost, so the trace span sees it
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::not_found("Resource")
}
