//! Shared types for the sales dashboard
//!
//! Types used by the server and by anything talking to its API:
//! error types, the sales row model, query parameter validation and the
//! response envelopes.

pub mod error;
pub mod models;
pub mod query;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
pub use models::{FilterOptions, SaleRecord, SalesSummary};
pub use query::{PaginatedResponse, SalesFilter, SalesListRequest, SalesQuery, Strictness};
