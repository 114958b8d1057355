//! Search criteria accepted from callers.
//!
//! Every dimension is optional. An empty string counts as "not supplied" so
//! the predicate builder and the suggestion table agree on what was asked for.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Row cap applied when the caller gives no usable limit.
pub const DEFAULT_LIMIT: u32 = 5;

/// Upper bound on the row cap for a single request.
pub const MAX_LIMIT: u32 = 100;

/// Sparse, immutable search criteria for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CriteriaInput")]
pub struct SearchCriteria {
    specialty: Option<String>,
    city: Option<String>,
    state: Option<String>,
    procedure: Option<String>,
    limit: u32,
}

/// Loosely typed criteria as they arrive on the wire.
///
/// `limit` stays a raw JSON value so that strings, floats and garbage can be
/// coerced instead of rejected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CriteriaInput {
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub procedure: Option<String>,
    #[serde(default)]
    pub limit: Option<JsonValue>,
}

impl From<CriteriaInput> for SearchCriteria {
    fn from(input: CriteriaInput) -> Self {
        Self {
            specialty: supplied(input.specialty),
            city: supplied(input.city),
            state: supplied(input.state).map(|s| normalize_state(&s)),
            procedure: supplied(input.procedure),
            limit: coerce_limit(input.limit.as_ref()),
        }
    }
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchCriteria {
    /// Criteria with no filters and the default limit
    pub fn new() -> Self {
        Self {
            specialty: None,
            city: None,
            state: None,
            procedure: None,
            limit: DEFAULT_LIMIT,
        }
    }

    pub fn with_specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = supplied(Some(specialty.into()));
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = supplied(Some(city.into()));
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = supplied(Some(state.into())).map(|s| normalize_state(&s));
        self
    }

    pub fn with_procedure(mut self, procedure: impl Into<String>) -> Self {
        self.procedure = supplied(Some(procedure.into()));
        self
    }

    /// Set the row cap; zero falls back to the default and large values are capped
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = clamp_limit(limit as u64);
        self
    }

    pub fn specialty(&self) -> Option<&str> {
        self.specialty.as_deref()
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    /// State abbreviation, already uppercased
    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn procedure(&self) -> Option<&str> {
        self.procedure.as_deref()
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }
}

fn supplied(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn normalize_state(state: &str) -> String {
    state.trim().to_uppercase()
}

fn clamp_limit(limit: u64) -> u32 {
    match limit {
        0 => DEFAULT_LIMIT,
        n if n > MAX_LIMIT as u64 => MAX_LIMIT,
        n => n as u32,
    }
}

/// Coerce an arbitrary JSON limit into a positive row cap.
///
/// Numbers and numeric strings are accepted; fractional values are floored.
/// Anything missing, non-numeric, zero or negative yields [`DEFAULT_LIMIT`].
pub fn coerce_limit(value: Option<&JsonValue>) -> u32 {
    let parsed = match value {
        Some(JsonValue::Number(n)) => n.as_u64().map(|n| n as f64).or_else(|| n.as_f64()),
        Some(JsonValue::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(n) if n.is_finite() && n >= 1.0 => clamp_limit(n.floor() as u64),
        _ => DEFAULT_LIMIT,
    }
}
