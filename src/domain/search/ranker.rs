//! Ranking client boundary

use std::fmt::Debug;

use async_trait::async_trait;

use super::{SearchError, SearchResults};
use crate::domain::profile::Profile;

/// Seam between the query dispatcher and the remote ranking client
#[async_trait]
pub trait ProfileRanker: Send + Sync + Debug {
    /// Rank candidates against a free-text query
    ///
    /// Fails with `SearchError::RemoteInvocation` on network/service errors
    /// and `SearchError::ResponseParse` on schema-violating responses.
    async fn rank(
        &self,
        query: &str,
        candidates: &[Profile],
    ) -> Result<SearchResults, SearchError>;

    /// Generate related search suggestions for a query
    async fn suggest(&self, query: &str) -> Result<Vec<String>, SearchError>;

    /// Get the ranker name
    fn ranker_name(&self) -> &'static str;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Default)]
    pub struct MockProfileRanker {
        results: Option<SearchResults>,
        suggestions: Vec<String>,
        fail_remote: bool,
        fail_parse: bool,
        calls: AtomicUsize,
    }

    impl MockProfileRanker {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_results(mut self, results: SearchResults) -> Self {
            self.results = Some(results);
            self
        }

        pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
            self.suggestions = suggestions;
            self
        }

        pub fn failing_remote(mut self) -> Self {
            self.fail_remote = true;
            self
        }

        pub fn failing_parse(mut self) -> Self {
            self.fail_parse = true;
            self
        }

        /// Number of times `rank` has been invoked
        pub fn rank_calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ProfileRanker for MockProfileRanker {
        async fn rank(
            &self,
            _query: &str,
            _candidates: &[Profile],
        ) -> Result<SearchResults, SearchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);

            if self.fail_remote {
                return Err(SearchError::remote_invocation("mock network failure"));
            }

            if self.fail_parse {
                return Err(SearchError::response_parse("mock malformed payload"));
            }

            self.results
                .clone()
                .ok_or_else(|| SearchError::remote_invocation("no mock results configured"))
        }

        async fn suggest(&self, _query: &str) -> Result<Vec<String>, SearchError> {
            if self.fail_remote {
                return Err(SearchError::remote_invocation("mock network failure"));
            }

            Ok(self.suggestions.clone())
        }

        fn ranker_name(&self) -> &'static str {
            "mock"
        }
    }
}
