//! Physician search orchestration.
//!
//! One request is one pass through criteria -> clauses -> statement ->
//! executor -> result. The executor call is the only await point, and every
//! call is bounded by the configured query timeout.

mod diagnostics;

pub use diagnostics::DiagnosticReport;

use std::time::{Duration, Instant};

use physician_core::{
    CompiledQuery, ProviderRecord, QueryError, SearchCriteria, SearchResult, Suggestion, compile,
    predicate,
};
use serde_json::Value as JsonValue;

use crate::db::{QueryExecutor, Row};

/// Tuning knobs for the search engine
#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub query_timeout: Duration,
    pub diagnostics: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            query_timeout: Duration::from_secs(30),
            diagnostics: true,
        }
    }
}

/// The search engine's public entry point
pub struct PhysicianSearch<E> {
    executor: E,
    options: SearchOptions,
}

impl<E: QueryExecutor> PhysicianSearch<E> {
    pub fn new(executor: E, options: SearchOptions) -> Self {
        Self { executor, options }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Run one search.
    ///
    /// Never fails: store errors become a result with `error: true` and are
    /// logged with the statement and parameters that caused them.
    pub async fn search(&self, criteria: &SearchCriteria) -> SearchResult {
        let started = Instant::now();
        tracing::info!(
            specialty = criteria.specialty(),
            city = criteria.city(),
            state = criteria.state(),
            procedure = criteria.procedure(),
            limit = criteria.limit(),
            "Physician search start"
        );

        let clauses = predicate::build(criteria);
        let query = compile(&clauses, criteria.limit());
        tracing::debug!(sql = %query.sql, params = ?query.params, "Compiled search query");

        let records = match self.fetch_records(&query).await {
            Ok(records) => records,
            Err(err) => {
                tracing::error!(
                    error = %err,
                    statement = err.statement(),
                    params = ?err.params(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Physician search failed"
                );
                record_outcome("error");
                return SearchResult::failed();
            }
        };

        if records.is_empty() {
            tracing::info!("No rows matched, deriving suggestion");
            let suggestion = Suggestion::for_criteria(criteria);

            if self.options.diagnostics {
                let report = DiagnosticReport::collect(self, criteria).await;
                report.log();
            }

            record_outcome("empty");
            tracing::info!(
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Physician search end"
            );
            return SearchResult::empty(suggestion.to_string());
        }

        record_outcome("found");
        tracing::info!(
            rows = records.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Physician search end"
        );
        SearchResult::found(records)
    }

    async fn fetch_records(
        &self,
        query: &CompiledQuery,
    ) -> Result<Vec<ProviderRecord>, QueryError> {
        let rows = self.execute(query, "search").await?;
        rows.into_iter()
            .map(|row| {
                serde_json::from_value(JsonValue::Object(row))
                    .map_err(|e| QueryError::decode(query, e))
            })
            .collect()
    }

    /// Execute one statement under the configured timeout
    async fn execute(
        &self,
        query: &CompiledQuery,
        kind: &'static str,
    ) -> Result<Vec<Row>, QueryError> {
        let started = Instant::now();
        let pending = self.executor.execute(query);
        let outcome = tokio::time::timeout(self.options.query_timeout, pending)
            .await
            .unwrap_or_else(|_| Err(QueryError::timeout(query, started.elapsed())));

        let elapsed = started.elapsed();
        metrics::histogram!("physician_search_query_duration_seconds", "query" => kind)
            .record(elapsed.as_secs_f64());
        tracing::debug!(query = kind, elapsed_ms = elapsed.as_millis() as u64, "Statement executed");

        outcome
    }
}

fn record_outcome(outcome: &'static str) {
    metrics::counter!("physician_search_total", "outcome" => outcome).increment(1);
}
