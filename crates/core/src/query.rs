//! Statement compilation.
//!
//! Every statement is a fixed template over known identifiers; user text only
//! ever reaches the store as a bound parameter.

use serde::Serialize;

use crate::predicate::{Column, FilterClause};
use crate::value::SqlValue;

/// Backing table for provider/service rows
pub const PROVIDER_TABLE: &str = "provider_services";

/// Maximum distinct values returned by a diagnostic probe
pub const PROBE_LIMIT: i64 = 5;

/// A parameterized statement ready for execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompiledQuery {
    pub sql: String,
    pub params: Vec<SqlValue>,
}

/// Compile filter clauses into the provider search statement.
///
/// Projected columns are read as text, whatever their storage type. Rows are
/// totally ordered on the projection so the capped result is stable across
/// runs. The row cap is always bound as the last parameter.
pub fn compile(clauses: &[FilterClause], limit: u32) -> CompiledQuery {
    let mut next_placeholder = 1;
    let mut params = Vec::new();

    let predicate = if clauses.is_empty() {
        "1=1".to_string()
    } else {
        clauses
            .iter()
            .map(|clause| {
                params.extend(clause.bound_values());
                clause.sql_fragment(&mut next_placeholder)
            })
            .collect::<Vec<_>>()
            .join(" AND ")
    };

    let projection = Column::PROJECTION
        .iter()
        .map(|column| format!("{0}::text AS {0}", column.as_str()))
        .collect::<Vec<_>>()
        .join(", ");

    let ordering = Column::ORDERING
        .iter()
        .map(Column::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    let sql = format!(
        "SELECT {} FROM {} WHERE {} ORDER BY {} LIMIT ${}",
        projection, PROVIDER_TABLE, predicate, ordering, next_placeholder
    );
    params.push(SqlValue::Int(limit as i64));

    CompiledQuery { sql, params }
}

/// Probe: total number of rows in the provider table
pub fn count_rows() -> CompiledQuery {
    CompiledQuery {
        sql: format!("SELECT COUNT(*) AS total FROM {}", PROVIDER_TABLE),
        params: Vec::new(),
    }
}

/// Probe: distinct values of `column` containing `text`, case-insensitively
pub fn distinct_matches(column: Column, text: &str) -> CompiledQuery {
    let column = column.as_str();
    CompiledQuery {
        sql: format!(
            "SELECT DISTINCT {column} FROM {PROVIDER_TABLE} \
             WHERE LOWER({column}) LIKE LOWER($1) ORDER BY {column} LIMIT $2"
        ),
        params: vec![
            SqlValue::Text(crate::normalize::contains_pattern(text)),
            SqlValue::Int(PROBE_LIMIT),
        ],
    }
}
