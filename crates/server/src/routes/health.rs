//! Health check endpoint

use axum::{Json, extract::State};
use serde::Serialize;

use super::AppState;
use crate::db::{PoolStatus, QueryExecutor};
use crate::error::AppError;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pool: Option<PoolStatus>,
}

/// GET /health - Check database connectivity and return server health status
pub async fn check<E: QueryExecutor + 'static>(
    State(state): State<AppState<E>>,
) -> Result<Json<HealthResponse>, AppError> {
    let executor = state.search.executor();
    let timeout = state.search.options().query_timeout;

    match tokio::time::timeout(timeout, executor.ping()).await {
        Ok(Ok(())) => Ok(Json(HealthResponse {
            status: "healthy".to_string(),
            pool: executor.pool_status(),
        })),
        Ok(Err(e)) => {
            tracing::error!(error = %e, "Health check query failed");
            Err(e.into())
        }
        Err(_) => {
            tracing::error!(timeout_ms = timeout.as_millis() as u64, "Health check timed out");
            Err(AppError::Unavailable("Database health check timed out".to_string()))
        }
    }
}
