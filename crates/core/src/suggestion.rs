//! Suggestions for broadening a search that matched nothing

use std::fmt;

use crate::criteria::SearchCriteria;

const NO_MATCH_PREFIX: &str = "No physicians found matching your criteria.";

/// How the caller should broaden an empty search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestion {
    /// City and state were both given: drop the city
    StateOnly { state: String, city: String },
    /// A procedure was given: search by specialty instead
    SpecialtyOverProcedure { procedure: String },
    /// Anything else
    Broaden,
}

impl Suggestion {
    /// Pick exactly one suggestion from the supplied criteria.
    ///
    /// Rules are checked in priority order and never combined.
    pub fn for_criteria(criteria: &SearchCriteria) -> Self {
        if let (Some(city), Some(state)) = (criteria.city(), criteria.state()) {
            return Suggestion::StateOnly {
                state: state.to_string(),
                city: city.to_string(),
            };
        }

        if let Some(procedure) = criteria.procedure() {
            return Suggestion::SpecialtyOverProcedure {
                procedure: procedure.to_string(),
            };
        }

        Suggestion::Broaden
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suggestion::StateOnly { state, city } => write!(
                f,
                "{} Try searching in all of {} instead of just {}.",
                NO_MATCH_PREFIX, state, city
            ),
            Suggestion::SpecialtyOverProcedure { procedure } => write!(
                f,
                "{} Try searching by specialty instead of the specific procedure \"{}\".",
                NO_MATCH_PREFIX, procedure
            ),
            Suggestion::Broaden => {
                write!(f, "{} Try broadening your search criteria.", NO_MATCH_PREFIX)
            }
        }
    }
}
