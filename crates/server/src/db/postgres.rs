//! Postgres-backed executor over a bounded connection pool

use async_trait::async_trait;
use deadpool_postgres::{Config as PgConfig, Pool, PoolConfig, Runtime};
use physician_core::{CompiledQuery, QueryError, SqlValue};
use serde::Serialize;
use serde_json::Value as JsonValue;
use tokio_postgres::NoTls;
use tokio_postgres::types::{ToSql, Type};

use super::{QueryExecutor, Row};
use crate::config::DatabaseConfig;

/// Snapshot of pool occupancy
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PoolStatus {
    pub max_size: usize,
    pub size: usize,
    pub available: usize,
    pub waiting: usize,
}

/// Pooled executor.
///
/// The pool waits for a free connection when every connection is busy; there
/// is no cap on how many requests may wait. Callers bound the wait with their
/// own timeout.
#[derive(Clone)]
pub struct PgExecutor {
    pool: Pool,
}

impl PgExecutor {
    /// Create the connection pool. Connections are opened lazily on first use.
    pub fn open(config: &DatabaseConfig) -> Result<Self, deadpool_postgres::CreatePoolError> {
        let mut cfg = PgConfig::new();
        cfg.host = Some(config.host.clone());
        cfg.port = Some(config.port);
        cfg.user = Some(config.user.clone());
        cfg.password = config.password.clone();
        cfg.dbname = Some(config.database.clone());
        cfg.pool = Some(PoolConfig::new(config.connection_limit));

        let pool = cfg.create_pool(Some(Runtime::Tokio1), NoTls)?;
        Ok(Self { pool })
    }

    /// Wrap an existing pool
    pub fn from_pool(pool: Pool) -> Self {
        Self { pool }
    }

    /// Current pool occupancy
    pub fn status(&self) -> PoolStatus {
        let status = self.pool.status();
        PoolStatus {
            max_size: status.max_size,
            size: status.size,
            available: status.available as usize,
            waiting: status.waiting,
        }
    }

    /// Close the pool; in-flight connections are dropped when returned
    pub fn close(&self) {
        self.pool.close();
    }
}

#[async_trait]
impl QueryExecutor for PgExecutor {
    async fn execute(&self, query: &CompiledQuery) -> Result<Vec<Row>, QueryError> {
        let client = self
            .pool
            .get()
            .await
            .map_err(|e| QueryError::pool(query, e))?;

        let statement = client
            .prepare_cached(&query.sql)
            .await
            .map_err(|e| QueryError::execution(query, e))?;

        let params: Vec<&(dyn ToSql + Sync)> = query.params.iter().map(bind).collect();

        let rows = client
            .query(&statement, &params)
            .await
            .map_err(|e| QueryError::execution(query, e))?;

        rows.iter().map(|row| row_to_map(query, row)).collect()
    }

    fn pool_status(&self) -> Option<PoolStatus> {
        Some(self.status())
    }
}

fn bind(value: &SqlValue) -> &(dyn ToSql + Sync) {
    match value {
        SqlValue::Text(s) => s,
        SqlValue::Int(i) => i,
    }
}

/// Convert a row into a column-name keyed map.
///
/// Integer, float and boolean columns keep their JSON type; everything else
/// is read as text. A column that cannot be read fails the whole row with
/// [`QueryError::Decode`] rather than turning into null.
fn row_to_map(query: &CompiledQuery, row: &tokio_postgres::Row) -> Result<Row, QueryError> {
    let mut map = Row::new();

    for (idx, column) in row.columns().iter().enumerate() {
        let ty = column.type_();
        let read: Result<Option<JsonValue>, tokio_postgres::Error> = if *ty == Type::INT8 {
            row.try_get::<_, Option<i64>>(idx).map(|v| v.map(JsonValue::from))
        } else if *ty == Type::INT4 {
            row.try_get::<_, Option<i32>>(idx).map(|v| v.map(JsonValue::from))
        } else if *ty == Type::INT2 {
            row.try_get::<_, Option<i16>>(idx).map(|v| v.map(JsonValue::from))
        } else if *ty == Type::FLOAT8 {
            row.try_get::<_, Option<f64>>(idx).map(|v| v.map(JsonValue::from))
        } else if *ty == Type::FLOAT4 {
            row.try_get::<_, Option<f32>>(idx).map(|v| v.map(JsonValue::from))
        } else if *ty == Type::BOOL {
            row.try_get::<_, Option<bool>>(idx).map(|v| v.map(JsonValue::from))
        } else {
            row.try_get::<_, Option<String>>(idx).map(|v| v.map(JsonValue::from))
        };
        let value = read.map_err(|e| {
            QueryError::decode(
                query,
                format!("column {} ({}): {}", column.name(), ty.name(), e),
            )
        })?;

        map.insert(column.name().to_string(), value.unwrap_or(JsonValue::Null));
    }

    Ok(map)
}
