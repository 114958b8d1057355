//! Typed filter predicates built from search criteria.
//!
//! Clauses are emitted in a fixed order: state, specialty, city, procedure.

use crate::criteria::SearchCriteria;
use crate::normalize::{contains_pattern, specialty_patterns};
use crate::value::SqlValue;

/// Columns of `provider_services` that the engine reads or filters on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    FirstName,
    LastOrgName,
    Credentials,
    StreetAddress,
    City,
    State,
    PostalCode,
    ProviderType,
    ServiceDescription,
    Npi,
}

impl Column {
    /// Columns returned for every provider record, in projection order
    pub const PROJECTION: [Column; 10] = [
        Column::FirstName,
        Column::LastOrgName,
        Column::Credentials,
        Column::StreetAddress,
        Column::City,
        Column::State,
        Column::PostalCode,
        Column::ProviderType,
        Column::ServiceDescription,
        Column::Npi,
    ];

    /// Sort key for search results: provider, then service, then the rest
    /// of the projection
    pub const ORDERING: [Column; 10] = [
        Column::Npi,
        Column::ServiceDescription,
        Column::LastOrgName,
        Column::FirstName,
        Column::Credentials,
        Column::StreetAddress,
        Column::City,
        Column::State,
        Column::PostalCode,
        Column::ProviderType,
    ];

    /// Identifier in the backing schema
    pub fn as_str(&self) -> &'static str {
        match self {
            Column::FirstName => "rndrng_prvdr_first_name",
            Column::LastOrgName => "rndrng_prvdr_last_org_name",
            Column::Credentials => "rndrng_prvdr_crdntls",
            Column::StreetAddress => "rndrng_prvdr_st1",
            Column::City => "rndrng_prvdr_city",
            Column::State => "rndrng_prvdr_state_abrvtn",
            Column::PostalCode => "rndrng_prvdr_zip5",
            Column::ProviderType => "rndrng_prvdr_type",
            Column::ServiceDescription => "hcpcs_desc",
            Column::Npi => "rndrng_npi",
        }
    }
}

/// One AND-ed condition of the WHERE clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterClause {
    /// `column = $n`
    Equals { column: Column, value: String },
    /// `column ILIKE $n`
    Like { column: Column, pattern: String },
    /// `(column ILIKE $n OR column ILIKE $m ...)`
    LikeAny { column: Column, patterns: Vec<String> },
}

impl FilterClause {
    /// Render this clause, numbering placeholders from `next_placeholder`.
    ///
    /// `next_placeholder` is advanced past every placeholder emitted, so
    /// clauses can be rendered back to back.
    pub fn sql_fragment(&self, next_placeholder: &mut usize) -> String {
        let mut placeholder = || {
            let p = format!("${}", *next_placeholder);
            *next_placeholder += 1;
            p
        };

        match self {
            FilterClause::Equals { column, .. } => {
                format!("{} = {}", column.as_str(), placeholder())
            }
            FilterClause::Like { column, .. } => {
                format!("{} ILIKE {}", column.as_str(), placeholder())
            }
            FilterClause::LikeAny { column, patterns } => {
                let alternatives: Vec<String> = patterns
                    .iter()
                    .map(|_| format!("{} ILIKE {}", column.as_str(), placeholder()))
                    .collect();
                format!("({})", alternatives.join(" OR "))
            }
        }
    }

    /// Values bound by this clause, in placeholder order
    pub fn bound_values(&self) -> Vec<SqlValue> {
        match self {
            FilterClause::Equals { value, .. } => vec![SqlValue::from(value.as_str())],
            FilterClause::Like { pattern, .. } => vec![SqlValue::from(pattern.as_str())],
            FilterClause::LikeAny { patterns, .. } => {
                patterns.iter().map(|p| SqlValue::from(p.as_str())).collect()
            }
        }
    }

    pub fn column(&self) -> Column {
        match self {
            FilterClause::Equals { column, .. }
            | FilterClause::Like { column, .. }
            | FilterClause::LikeAny { column, .. } => *column,
        }
    }
}

/// Build the ordered clause list for the given criteria.
///
/// An empty list means "no filter"; the compiler turns it into a tautology.
pub fn build(criteria: &SearchCriteria) -> Vec<FilterClause> {
    let mut clauses = Vec::new();

    if let Some(state) = criteria.state() {
        clauses.push(FilterClause::Equals {
            column: Column::State,
            value: state.to_uppercase(),
        });
    }

    if let Some(specialty) = criteria.specialty() {
        let mut patterns = specialty_patterns(specialty);
        let clause = if patterns.len() == 1 {
            FilterClause::Like {
                column: Column::ProviderType,
                pattern: patterns.remove(0),
            }
        } else {
            FilterClause::LikeAny {
                column: Column::ProviderType,
                patterns,
            }
        };
        clauses.push(clause);
    }

    if let Some(city) = criteria.city() {
        clauses.push(FilterClause::Like {
            column: Column::City,
            pattern: contains_pattern(city),
        });
    }

    if let Some(procedure) = criteria.procedure() {
        clauses.push(FilterClause::Like {
            column: Column::ServiceDescription,
            pattern: contains_pattern(procedure),
        });
    }

    clauses
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_criteria_no_clauses() {
        assert!(build(&SearchCriteria::new()).is_empty());
    }

    #[test]
    fn test_clause_order_is_fixed() {
        let criteria = SearchCriteria::new()
            .with_procedure("knee")
            .with_city("Chicago")
            .with_specialty("Cardiology")
            .with_state("il");

        let columns: Vec<Column> = build(&criteria).iter().map(|c| c.column()).collect();
        assert_eq!(
            columns,
            vec![
                Column::State,
                Column::ProviderType,
                Column::City,
                Column::ServiceDescription
            ]
        );
    }

    #[test]
    fn test_state_binds_uppercase() {
        let clauses = build(&SearchCriteria::new().with_state("ca"));
        assert_eq!(
            clauses,
            vec![FilterClause::Equals {
                column: Column::State,
                value: "CA".to_string()
            }]
        );
    }

    #[test]
    fn test_profession_becomes_or_clause() {
        let clauses = build(&SearchCriteria::new().with_specialty("Cardiologist"));
        assert_eq!(clauses.len(), 1);

        let mut next = 1;
        assert_eq!(
            clauses[0].sql_fragment(&mut next),
            "(rndrng_prvdr_type ILIKE $1 OR rndrng_prvdr_type ILIKE $2)"
        );
        assert_eq!(next, 3);
        assert_eq!(
            clauses[0].bound_values(),
            vec![SqlValue::from("%Cardiologist%"), SqlValue::from("%Cardiology%")]
        );
    }

    #[test]
    fn test_plain_specialty_is_single_like() {
        let clauses = build(&SearchCriteria::new().with_specialty("Cardiology"));
        let mut next = 4;
        assert_eq!(clauses[0].sql_fragment(&mut next), "rndrng_prvdr_type ILIKE $4");
        assert_eq!(clauses[0].bound_values(), vec![SqlValue::from("%Cardiology%")]);
    }

    #[test]
    fn test_city_and_procedure_are_wrapped() {
        let clauses = build(&SearchCriteria::new().with_city("Boston").with_procedure("knee"));
        let values: Vec<SqlValue> = clauses.iter().flat_map(|c| c.bound_values()).collect();
        assert_eq!(values, vec![SqlValue::from("%Boston%"), SqlValue::from("%knee%")]);
    }
}
