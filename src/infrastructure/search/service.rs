//! Query dispatcher: cache, remote ranking and fallback orchestration

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use super::fallback::FallbackScorer;
use crate::domain::{
    Cache, CacheExt, DomainError, ProfileRanker, ProfileRepository, SearchOptions, SearchResults,
};

pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);

/// Entry point for directory searches
///
/// Dispatch order: cache, then remote ranking, then local fallback. Remote
/// failures are absorbed here; callers always get a result set. Fallback
/// results are never written to the cache, so the next search retries the
/// remote path.
#[derive(Debug)]
pub struct ProfileSearchService {
    repository: Arc<dyn ProfileRepository>,
    ranker: Arc<dyn ProfileRanker>,
    fallback: FallbackScorer,
    cache: Arc<dyn Cache>,
    cache_ttl: Duration,
    /// Monotonic dispatch counter; only the latest dispatch may write the cache
    sequence: AtomicU64,
}

impl ProfileSearchService {
    pub fn new(
        repository: Arc<dyn ProfileRepository>,
        ranker: Arc<dyn ProfileRanker>,
        cache: Arc<dyn Cache>,
    ) -> Self {
        Self {
            repository,
            ranker,
            fallback: FallbackScorer::new(),
            cache,
            cache_ttl: DEFAULT_CACHE_TTL,
            sequence: AtomicU64::new(0),
        }
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Runs a free-text search over the approved directory
    pub async fn search(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<SearchResults, DomainError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(DomainError::validation("Search query must not be empty"));
        }

        let cache_key = options.cache_key(query);

        match self.cache.get::<SearchResults>(&cache_key).await {
            Ok(Some(cached)) => {
                debug!(key = %cache_key, "Search cache hit");
                return Ok(cached);
            }
            Ok(None) => {}
            Err(e) => {
                // A broken cache read degrades to a miss
                warn!(key = %cache_key, error = %e, "Cache read failed");
            }
        }

        let seq = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;

        let candidates = self.repository.list_approved(options.archetype).await?;
        if candidates.is_empty() {
            debug!(query = %query, "No candidates to rank");
            return Ok(SearchResults::empty(
                crate::domain::SearchSource::Remote,
            ));
        }

        let results = match self.ranker.rank(query, &candidates).await {
            Ok(results) => {
                let results = self.apply_limit(results, options);

                if self.sequence.load(Ordering::SeqCst) == seq {
                    if let Err(e) = self.cache.set(&cache_key, &results, self.cache_ttl).await {
                        warn!(key = %cache_key, error = %e, "Cache write failed");
                    }
                } else {
                    debug!(key = %cache_key, "Dispatch superseded, skipping cache write");
                }

                results
            }
            Err(e) => {
                info!(query = %query, error = %e, "Remote ranking failed, using fallback");
                self.apply_limit(self.fallback.rank(query, &candidates), options)
            }
        };

        Ok(results)
    }

    /// Related search phrases; best-effort, an error yields no suggestions
    pub async fn suggestions(&self, query: &str) -> Result<Vec<String>, DomainError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        match self.ranker.suggest(query).await {
            Ok(suggestions) => Ok(suggestions),
            Err(e) => {
                warn!(query = %query, error = %e, "Suggestion generation failed");
                Ok(Vec::new())
            }
        }
    }

    fn apply_limit(&self, results: SearchResults, options: &SearchOptions) -> SearchResults {
        match options.max_results {
            Some(max) => results.truncated(max),
            None => results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::search::MockProfileRanker;
    use crate::domain::cache::MockCache;
    use crate::domain::{
        Archetype, Profile, ProfileId, RankedProfile, SearchMetadata, SearchSource,
    };
    use crate::infrastructure::profile::InMemoryProfileRepository;

    fn seed_profiles() -> Vec<Profile> {
        vec![
            Profile::new(ProfileId::new("wiz-1").unwrap(), "Sarah", Archetype::Coach)
                .with_specialties(vec!["Career Development".to_string()])
                .with_rating(4.9),
            Profile::new(ProfileId::new("wiz-2").unwrap(), "Michael", Archetype::Mentor)
                .with_specialties(vec!["Tech Leadership".to_string()])
                .with_rating(4.8),
        ]
    }

    fn remote_results() -> SearchResults {
        SearchResults::new(
            vec![RankedProfile::new(
                seed_profiles().remove(0),
                SearchMetadata::new(9.0, "Strong career focus"),
            )],
            "Career support",
            vec![],
            SearchSource::Remote,
        )
    }

    fn service(ranker: MockProfileRanker) -> (ProfileSearchService, Arc<MockCache>) {
        let cache = Arc::new(MockCache::new());
        let service = ProfileSearchService::new(
            Arc::new(InMemoryProfileRepository::with_profiles(seed_profiles())),
            Arc::new(ranker),
            cache.clone(),
        );
        (service, cache)
    }

    #[tokio::test]
    async fn test_remote_results_are_cached() {
        let (service, cache) = service(MockProfileRanker::new().with_results(remote_results()));

        let results = service.search("career", &SearchOptions::new()).await.unwrap();
        assert_eq!(results.source, SearchSource::Remote);
        assert_eq!(cache.size().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_cache_hit_skips_ranking() {
        let ranker = Arc::new(MockProfileRanker::new().with_results(remote_results()));
        let cache = Arc::new(
            MockCache::new().with_entry("search:career", &remote_results(), None),
        );
        let service = ProfileSearchService::new(
            Arc::new(InMemoryProfileRepository::with_profiles(seed_profiles())),
            ranker.clone(),
            cache,
        );

        let results = service.search("career", &SearchOptions::new()).await.unwrap();
        assert_eq!(results.total_results, 1);
        assert_eq!(ranker.rank_calls(), 0);
    }

    #[tokio::test]
    async fn test_remote_failure_falls_back_without_caching() {
        let (service, cache) = service(MockProfileRanker::new().failing_remote());

        let results = service
            .search("career coach", &SearchOptions::new())
            .await
            .unwrap();

        assert_eq!(results.source, SearchSource::Fallback);
        assert_eq!(cache.size().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_parse_failure_falls_back() {
        let (service, _cache) = service(MockProfileRanker::new().failing_parse());

        let results = service
            .search("tech leadership mentor", &SearchOptions::new())
            .await
            .unwrap();

        assert_eq!(results.source, SearchSource::Fallback);
        assert_eq!(results.profiles[0].profile.id.as_str(), "wiz-2");
    }

    #[tokio::test]
    async fn test_empty_query_is_rejected() {
        let (service, _cache) = service(MockProfileRanker::new());

        let result = service.search("   ", &SearchOptions::new()).await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_max_results_is_applied() {
        let full = SearchResults::new(
            seed_profiles()
                .into_iter()
                .map(|p| RankedProfile::new(p, SearchMetadata::new(5.0, "")))
                .collect(),
            "",
            vec![],
            SearchSource::Remote,
        );
        let (service, _cache) = service(MockProfileRanker::new().with_results(full));

        let options = SearchOptions::new().with_max_results(1);
        let results = service.search("career", &options).await.unwrap();

        assert_eq!(results.total_results, 1);
    }

    #[tokio::test]
    async fn test_cache_read_error_degrades_to_miss() {
        let ranker = MockProfileRanker::new().with_results(remote_results());
        let cache = Arc::new(MockCache::new().with_error("cache down"));
        let service = ProfileSearchService::new(
            Arc::new(InMemoryProfileRepository::with_profiles(seed_profiles())),
            Arc::new(ranker),
            cache,
        );

        let results = service.search("career", &SearchOptions::new()).await.unwrap();
        assert_eq!(results.source, SearchSource::Remote);
    }

    #[tokio::test]
    async fn test_empty_directory_returns_empty_results() {
        let ranker = MockProfileRanker::new().with_results(remote_results());
        let service = ProfileSearchService::new(
            Arc::new(InMemoryProfileRepository::new()),
            Arc::new(ranker),
            Arc::new(MockCache::new()),
        );

        let results = service.search("career", &SearchOptions::new()).await.unwrap();
        assert!(results.is_empty());
    }

    /// Ranker whose first call blocks until released, so a test can
    /// interleave a faster dispatch with a slower in-flight one
    #[derive(Debug)]
    struct GatedRanker {
        results: SearchResults,
        entered: tokio::sync::Notify,
        release: tokio::sync::Notify,
        calls: std::sync::atomic::AtomicUsize,
    }

    impl GatedRanker {
        fn new(results: SearchResults) -> Self {
            Self {
                results,
                entered: tokio::sync::Notify::new(),
                release: tokio::sync::Notify::new(),
                calls: std::sync::atomic::AtomicUsize::new(0),
            }
        }
    }

    #[async_trait::async_trait]
    impl crate::domain::ProfileRanker for GatedRanker {
        async fn rank(
            &self,
            _query: &str,
            _candidates: &[Profile],
        ) -> Result<SearchResults, crate::domain::SearchError> {
            let call = self.calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            if call == 0 {
                self.entered.notify_one();
                self.release.notified().await;
            }
            Ok(self.results.clone())
        }

        async fn suggest(&self, _query: &str) -> Result<Vec<String>, crate::domain::SearchError> {
            Ok(Vec::new())
        }

        fn ranker_name(&self) -> &'static str {
            "gated"
        }
    }

    #[tokio::test]
    async fn test_superseded_dispatch_is_returned_but_not_cached() {
        let cache = Arc::new(MockCache::new());
        let ranker = Arc::new(GatedRanker::new(remote_results()));
        let service = Arc::new(ProfileSearchService::new(
            Arc::new(InMemoryProfileRepository::with_profiles(seed_profiles())),
            ranker.clone(),
            cache.clone(),
        ));

        // Slower dispatch: blocks inside the ranker after claiming its sequence
        let slow = tokio::spawn({
            let service = service.clone();
            async move { service.search("stale query", &SearchOptions::new()).await }
        });
        ranker.entered.notified().await;

        // A newer dispatch completes first and writes its own entry
        service
            .search("fresh query", &SearchOptions::new())
            .await
            .unwrap();
        assert_eq!(cache.size().await.unwrap(), 1);

        // The stale dispatch still answers its caller, but must not cache
        ranker.release.notify_one();
        let stale = slow.await.unwrap().unwrap();
        assert_eq!(stale.source, SearchSource::Remote);
        assert_eq!(stale.total_results, 1);

        assert_eq!(cache.size().await.unwrap(), 1);
        assert!(cache.get_raw("search:stale query").await.unwrap().is_none());
        assert!(cache.get_raw("search:fresh query").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_suggestions_swallow_errors() {
        let (service, _cache) = service(MockProfileRanker::new().failing_remote());

        let suggestions = service.suggestions("career").await.unwrap();
        assert!(suggestions.is_empty());
    }

    #[tokio::test]
    async fn test_suggestions_pass_through() {
        let ranker =
            MockProfileRanker::new().with_suggestions(vec!["life coaching".to_string()]);
        let (service, _cache) = service(ranker);

        let suggestions = service.suggestions("coach").await.unwrap();
        assert_eq!(suggestions, vec!["life coaching"]);
    }
}
