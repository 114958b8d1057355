mod postgres;

pub use postgres::{PgExecutor, PoolStatus};

use async_trait::async_trait;
use physician_core::{CompiledQuery, QueryError};
use serde_json::{Map, Value as JsonValue};

/// One result row keyed by column name
pub type Row = Map<String, JsonValue>;

/// Executes parameterized statements against the provider store.
///
/// Implementations own their connections; callers share one executor for the
/// lifetime of the process and never see a raw connection.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Run one read-only statement and return its rows in store order
    async fn execute(&self, query: &CompiledQuery) -> Result<Vec<Row>, QueryError>;

    /// Cheap round trip used by health checks
    async fn ping(&self) -> Result<(), QueryError> {
        let probe = CompiledQuery {
            sql: "SELECT 1".to_string(),
            params: Vec::new(),
        };
        self.execute(&probe).await.map(|_| ())
    }

    /// Pool occupancy, for executors backed by a pool
    fn pool_status(&self) -> Option<PoolStatus> {
        None
    }
}
