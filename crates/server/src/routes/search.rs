//! Physician search endpoint

use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
};
use physician_core::{SearchCriteria, SearchResult};
use tracing::Instrument;

use super::AppState;
use crate::db::QueryExecutor;
use crate::error::AppError;
use crate::middleware::RequestId;

/// POST /search - Search providers by specialty, location or procedure
///
/// Store failures are reported inside the result (`error: true`) rather than
/// as an HTTP error; only an unreadable request body is rejected.
pub async fn search<E: QueryExecutor + 'static>(
    State(state): State<AppState<E>>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<SearchCriteria>, JsonRejection>,
) -> Result<Json<SearchResult>, AppError> {
    let Json(criteria) = payload?;

    let span = tracing::info_span!("physician_search", request_id = %request_id.0);
    let result = state.search.search(&criteria).instrument(span).await;

    Ok(Json(result))
}
