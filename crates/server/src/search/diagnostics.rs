//! Diagnostic probes for searches that matched nothing.
//!
//! Probes only feed the operational log. They never change the result, and a
//! failing probe is logged and skipped.

use physician_core::{Column, CompiledQuery, SearchCriteria, query};
use serde_json::Value as JsonValue;

use super::PhysicianSearch;
use crate::db::{QueryExecutor, Row};

/// What the probes found out about an empty search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticReport {
    /// Rows in the provider table; `None` if the probe failed
    pub total_rows: Option<i64>,
    /// Provider types containing the requested specialty
    pub specialty_matches: Option<Vec<String>>,
    /// Cities containing the requested city
    pub city_matches: Option<Vec<String>>,
}

impl DiagnosticReport {
    /// Run the probes that apply to the supplied criteria, in order
    pub async fn collect<E: QueryExecutor>(
        search: &PhysicianSearch<E>,
        criteria: &SearchCriteria,
    ) -> Self {
        let mut report = DiagnosticReport::default();

        let count = query::count_rows();
        report.total_rows = probe(search, &count).await.and_then(|rows| {
            rows.first()
                .and_then(|row| row.get("total"))
                .and_then(JsonValue::as_i64)
        });

        if let Some(specialty) = criteria.specialty() {
            let matches = query::distinct_matches(Column::ProviderType, specialty);
            report.specialty_matches = probe(search, &matches)
                .await
                .map(|rows| column_values(&rows, Column::ProviderType));
        }

        if let Some(city) = criteria.city() {
            let matches = query::distinct_matches(Column::City, city);
            report.city_matches = probe(search, &matches)
                .await
                .map(|rows| column_values(&rows, Column::City));
        }

        report
    }

    /// Emit the report to the operational log
    pub fn log(&self) {
        tracing::info!(
            total_rows = ?self.total_rows,
            specialty_matches = ?self.specialty_matches,
            city_matches = ?self.city_matches,
            "Empty search diagnostics"
        );

        if self.total_rows == Some(0) {
            tracing::warn!("Provider table is empty");
        }
    }
}

async fn probe<E: QueryExecutor>(
    search: &PhysicianSearch<E>,
    query: &CompiledQuery,
) -> Option<Vec<Row>> {
    match search.execute(query, "probe").await {
        Ok(rows) => Some(rows),
        Err(err) => {
            tracing::warn!(
                error = %err,
                statement = err.statement(),
                params = ?err.params(),
                "Diagnostic probe failed"
            );
            None
        }
    }
}

fn column_values(rows: &[Row], column: Column) -> Vec<String> {
    rows.iter()
        .filter_map(|row| row.get(column.as_str()))
        .filter_map(JsonValue::as_str)
        .map(String::from)
        .collect()
}
