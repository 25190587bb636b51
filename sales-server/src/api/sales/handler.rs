//! Sales API Handlers
//!
//! Every handler decodes the same [`SalesQuery`]; only the validation
//! strictness and the final query differ.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use shared::models::{FilterOptions, SaleRecord, SalesSummary};
use shared::query::{PaginatedResponse, SalesFilter, SalesListRequest, SalesQuery, Strictness};
use shared::{AppError, AppResult, ErrorCode};

use crate::core::ServerState;
use crate::db::repository::sales;

fn decode(query: Result<Query<SalesQuery>, QueryRejection>) -> AppResult<SalesQuery> {
    query
        .map(|Query(q)| q)
        .map_err(|e| AppError::new(ErrorCode::InvalidRequest).with_detail("reason", e.body_text()))
}

/// GET /api/sales - paginated, sorted, filtered rows
pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<SalesQuery>, QueryRejection>,
) -> AppResult<Json<PaginatedResponse<SaleRecord>>> {
    let query = decode(query)?;
    let request = SalesListRequest::parse(&query)?;

    let (rows, total) = sales::find_page(state.pool(), &request)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to fetch sales page");
            AppError::database("Failed to get sales data")
        })?;

    Ok(Json(PaginatedResponse::new(rows, request.page, total)))
}

/// GET /api/sales/filters - whole-table filter options
///
/// Query parameters are ignored.
pub async fn filters(State(state): State<ServerState>) -> AppResult<Json<FilterOptions>> {
    let options = sales::filter_options(state.pool()).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to load filter options");
        AppError::database("Failed to get filter options")
    })?;
    Ok(Json(options))
}

/// GET /api/sales/summary - aggregates over the filtered set
///
/// Unusable parameters are dropped rather than rejected.
pub async fn summary(
    State(state): State<ServerState>,
    query: Result<Query<SalesQuery>, QueryRejection>,
) -> AppResult<Json<SalesSummary>> {
    let query = decode(query)?;
    let filter = SalesFilter::parse(&query, Strictness::Lenient)?;

    let summary = sales::summarize(state.pool(), &filter).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to compute sales summary");
        AppError::database("Failed to get summary statistics")
    })?;
    Ok(Json(summary))
}
