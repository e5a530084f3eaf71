//! Search result types

use serde::{Deserialize, Serialize};

use crate::domain::profile::{Archetype, Profile};

/// Which path produced a result set
///
/// Remote scores are on a 0-10 scale; fallback scores are raw term counts.
/// The two scales are not comparable, so callers that care must check this
/// flag rather than inspect `reasoning` text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchSource {
    Remote,
    Fallback,
}

/// Relevance metadata attached to a ranked profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchMetadata {
    pub relevance_score: f32,
    pub reasoning: String,
    pub matched_keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archetype_match: Option<Archetype>,
}

impl SearchMetadata {
    pub fn new(relevance_score: f32, reasoning: impl Into<String>) -> Self {
        Self {
            relevance_score,
            reasoning: reasoning.into(),
            matched_keywords: Vec::new(),
            archetype_match: None,
        }
    }

    pub fn with_matched_keywords(mut self, keywords: Vec<String>) -> Self {
        self.matched_keywords = keywords;
        self
    }

    pub fn with_archetype_match(mut self, archetype: Archetype) -> Self {
        self.archetype_match = Some(archetype);
        self
    }
}

/// A profile merged with its relevance metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedProfile {
    #[serde(flatten)]
    pub profile: Profile,
    pub search_metadata: SearchMetadata,
}

impl RankedProfile {
    pub fn new(profile: Profile, search_metadata: SearchMetadata) -> Self {
        Self {
            profile,
            search_metadata,
        }
    }
}

/// Ordered result set of a directory search
///
/// Invariant: `profiles` is sorted descending by relevance score and
/// `total_results == profiles.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub profiles: Vec<RankedProfile>,
    pub search_intent: String,
    pub suggested_filters: Vec<String>,
    pub total_results: usize,
    pub source: SearchSource,
}

impl SearchResults {
    pub fn new(
        profiles: Vec<RankedProfile>,
        search_intent: impl Into<String>,
        suggested_filters: Vec<String>,
        source: SearchSource,
    ) -> Self {
        let total_results = profiles.len();
        Self {
            profiles,
            search_intent: search_intent.into(),
            suggested_filters,
            total_results,
            source,
        }
    }

    /// Empty result set, used when no dispatch occurs
    pub fn empty(source: SearchSource) -> Self {
        Self::new(Vec::new(), "", Vec::new(), source)
    }

    /// Keep only the first `max` results, fixing up the count
    pub fn truncated(mut self, max: usize) -> Self {
        self.profiles.truncate(max);
        self.total_results = self.profiles.len();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
