use std::time::Duration;

use thiserror::Error;

use crate::query::CompiledQuery;
use crate::value::SqlValue;

/// Failure at the execution boundary.
///
/// Every variant keeps the statement and its parameters so the failure can be
/// reproduced from the operational log. Messages come from the driver and
/// never include connection credentials.
#[derive(Debug, Clone, Error)]
pub enum QueryError {
    #[error("Connection pool error: {message}")]
    Pool {
        statement: String,
        params: Vec<SqlValue>,
        message: String,
    },

    #[error("Query failed: {message}")]
    Execution {
        statement: String,
        params: Vec<SqlValue>,
        message: String,
    },

    #[error("Query timed out after {}ms", .elapsed.as_millis())]
    Timeout {
        statement: String,
        params: Vec<SqlValue>,
        elapsed: Duration,
    },

    #[error("Unreadable row: {message}")]
    Decode {
        statement: String,
        params: Vec<SqlValue>,
        message: String,
    },
}

impl QueryError {
    pub fn pool(query: &CompiledQuery, err: impl std::fmt::Display) -> Self {
        QueryError::Pool {
            statement: query.sql.clone(),
            params: query.params.clone(),
            message: err.to_string(),
        }
    }

    pub fn execution(query: &CompiledQuery, err: impl std::fmt::Display) -> Self {
        QueryError::Execution {
            statement: query.sql.clone(),
            params: query.params.clone(),
            message: err.to_string(),
        }
    }

    pub fn timeout(query: &CompiledQuery, elapsed: Duration) -> Self {
        QueryError::Timeout {
            statement: query.sql.clone(),
            params: query.params.clone(),
            elapsed,
        }
    }

    pub fn decode(query: &CompiledQuery, err: impl std::fmt::Display) -> Self {
        QueryError::Decode {
            statement: query.sql.clone(),
            params: query.params.clone(),
            message: err.to_string(),
        }
    }

    /// Statement that failed
    pub fn statement(&self) -> &str {
        match self {
            QueryError::Pool { statement, .. }
            | QueryError::Execution { statement, .. }
            | QueryError::Timeout { statement, .. }
            | QueryError::Decode { statement, .. } => statement,
        }
    }

    /// Parameters bound to the failed statement
    pub fn params(&self) -> &[SqlValue] {
        match self {
            QueryError::Pool { params, .. }
            | QueryError::Execution { params, .. }
            | QueryError::Timeout { params, .. }
            | QueryError::Decode { params, .. } => params,
        }
    }
}
