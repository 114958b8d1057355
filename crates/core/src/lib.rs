//! physician-core: Search engine core for the physician directory
//!
//! Pure, synchronous building blocks shared by the server: search criteria,
//! specialty normalization, typed predicates, statement compilation and the
//! empty-result suggestion table. Nothing here touches the database.

pub mod criteria;
pub mod error;
pub mod normalize;
pub mod predicate;
pub mod query;
pub mod record;
pub mod result;
pub mod suggestion;
pub mod value;

pub use criteria::{CriteriaInput, DEFAULT_LIMIT, MAX_LIMIT, SearchCriteria};
pub use error::QueryError;
pub use normalize::specialty_patterns;
pub use predicate::{Column, FilterClause};
pub use query::{CompiledQuery, PROBE_LIMIT, PROVIDER_TABLE, compile};
pub use record::ProviderRecord;
pub use result::{FAILURE_MESSAGE, SearchResult};
pub use suggestion::Suggestion;
pub use value::SqlValue;
