use serde::{Deserialize, Serialize};

use crate::record::ProviderRecord;

/// Caller-facing message when execution fails
pub const FAILURE_MESSAGE: &str = "An error occurred while searching. Please try again.";

/// Outcome of one search request.
///
/// `count` always equals `physicians.len()`; the constructors are the only
/// way to build one outside this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    physicians: Vec<ProviderRecord>,
    count: usize,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<bool>,
}

impl SearchResult {
    /// Rows were found
    pub fn found(physicians: Vec<ProviderRecord>) -> Self {
        let count = physicians.len();
        Self {
            physicians,
            count,
            message: format!("Found {} physician(s) matching your criteria.", count),
            error: None,
        }
    }

    /// Nothing matched; `message` carries the suggestion
    pub fn empty(suggestion: impl Into<String>) -> Self {
        Self {
            physicians: Vec::new(),
            count: 0,
            message: suggestion.into(),
            error: None,
        }
    }

    /// Execution failed; details stay in the operational log
    pub fn failed() -> Self {
        Self {
            physicians: Vec::new(),
            count: 0,
            message: FAILURE_MESSAGE.to_string(),
            error: Some(true),
        }
    }

    pub fn physicians(&self) -> &[ProviderRecord] {
        &self.physicians
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_error(&self) -> bool {
        self.error.unwrap_or(false)
    }
}
