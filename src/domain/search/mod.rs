//! Search domain - options, results, errors and the ranker boundary

pub mod error;
pub mod query;
pub mod ranker;
pub mod result;

pub use error::SearchError;
pub use query::SearchOptions;
pub use ranker::ProfileRanker;
pub use result::{RankedProfile, SearchMetadata, SearchResults, SearchSource};

#[cfg(test)]
pub use ranker::mock::MockProfileRanker;
