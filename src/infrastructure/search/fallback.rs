//! Local keyword fallback scoring

use crate::domain::{
    Profile, RankedProfile, SearchMetadata, SearchResults, SearchSource,
};

const ARCHETYPE_BONUS: u32 = 2;

/// Keyword-overlap scorer used when the remote ranking path fails
///
/// Scores are raw term counts, not on the remote 0-10 scale. Results always
/// carry `SearchSource::Fallback` so callers can tell the paths apart.
#[derive(Debug, Clone, Default)]
pub struct FallbackScorer;

impl FallbackScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn rank(&self, query: &str, candidates: &[Profile]) -> SearchResults {
        let query_lower = query.to_lowercase();
        let terms: Vec<&str> = query_lower
            .split_whitespace()
            .filter(|t| t.len() > 2)
            .collect();

        let mut scored: Vec<RankedProfile> = candidates
            .iter()
            .filter_map(|profile| self.score(profile, &query_lower, &terms))
            .collect();

        scored.sort_by(|a, b| {
            b.search_metadata
                .relevance_score
                .total_cmp(&a.search_metadata.relevance_score)
        });

        SearchResults::new(
            scored,
            format!("Looking for: {}", query),
            Vec::new(),
            SearchSource::Fallback,
        )
    }

    fn score(&self, profile: &Profile, query_lower: &str, terms: &[&str]) -> Option<RankedProfile> {
        let searchable = format!(
            "{} {} {} {}",
            profile.name,
            profile.bio,
            profile.specialties.join(" "),
            profile.archetype
        )
        .to_lowercase();

        let matched: Vec<String> = terms
            .iter()
            .filter(|term| searchable.contains(**term))
            .map(|term| term.to_string())
            .collect();

        let mut score = matched.len() as u32;

        if query_lower.contains(profile.archetype.as_str()) {
            score += ARCHETYPE_BONUS;
        }

        if score == 0 {
            return None;
        }

        let metadata = SearchMetadata::new(score as f32, format!("Matched {} search terms", score))
            .with_matched_keywords(matched)
            .with_archetype_match(profile.archetype);

        Some(RankedProfile::new(profile.clone(), metadata))
    }
}
