//! LLM-backed profile ranking

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::{
    Archetype, LlmProvider, LlmRequest, Profile, ProfileRanker, RankedProfile, SearchError,
    SearchMetadata, SearchResults, SearchSource,
};

const RANKING_TEMPERATURE: f32 = 0.3;
const RANKING_MAX_TOKENS: u32 = 1000;
const SUGGESTION_TEMPERATURE: f32 = 0.5;
const SUGGESTION_MAX_TOKENS: u32 = 200;

/// Ranks directory profiles against a free-text query via an LLM provider
///
/// The model response must be a strict JSON document; any deviation from the
/// expected shape is a `ResponseParse` error, which the dispatcher treats as
/// a signal to fall back to local scoring.
#[derive(Debug, Clone)]
pub struct LlmProfileRanker {
    provider: Arc<dyn LlmProvider>,
    model: String,
}

impl LlmProfileRanker {
    pub fn new(provider: Arc<dyn LlmProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    fn build_system_prompt(&self) -> String {
        let archetypes = Archetype::ALL
            .iter()
            .map(|a| format!("- {}: {}", a, a.description()))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "You are an intelligent matching system for a directory of personal \
             and professional guides. Users describe what they need in natural \
             language and you rank the available guides by relevance.\n\n\
             Guide archetypes:\n{archetypes}\n\n\
             Analyze the user's query and return relevance scores for the given \
             guides. Respond with ONLY a JSON object in this exact format:\n\
             {{\n\
             \x20 \"matches\": [\n\
             \x20   {{\n\
             \x20     \"wizardId\": \"id\",\n\
             \x20     \"relevanceScore\": 8.5,\n\
             \x20     \"reasoning\": \"why this guide fits\",\n\
             \x20     \"matchedKeywords\": [\"keyword\"],\n\
             \x20     \"archetypeMatch\": \"coach\"\n\
             \x20   }}\n\
             \x20 ],\n\
             \x20 \"searchIntent\": \"what the user is looking for\",\n\
             \x20 \"suggestedFilters\": [\"filter\"]\n\
             }}\n\n\
             Scores are from 0 to 10. Only include guides with a score above 0. \
             Order matches from most to least relevant."
        )
    }

    fn build_user_prompt(&self, query: &str, candidates: &[Profile]) -> String {
        let listing = candidates
            .iter()
            .map(|p| {
                format!(
                    "- id: {} | name: {} | archetype: {} | specialties: {} | bio: {} \
                     | location: {} | availability: {} | rating: {} | hourly rate: ${}",
                    p.id,
                    p.name,
                    p.archetype,
                    p.specialties.join(", "),
                    p.bio,
                    p.location,
                    p.availability,
                    p.rating,
                    p.hourly_rate
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!("User query: \"{query}\"\n\nAvailable guides:\n{listing}")
    }

    fn parse_ranking(
        &self,
        content: &str,
        candidates: &[Profile],
    ) -> Result<SearchResults, SearchError> {
        let json = extract_json(content).ok_or_else(|| {
            SearchError::response_parse("no JSON object found in model response")
        })?;

        let parsed: LlmRankingResponse = serde_json::from_str(json)
            .map_err(|e| SearchError::response_parse(e.to_string()))?;

        let by_id: HashMap<&str, &Profile> = candidates
            .iter()
            .map(|p| (p.id.as_str(), p))
            .collect();

        let mut profiles = Vec::with_capacity(parsed.matches.len());
        for entry in parsed.matches {
            let id = entry.wizard_id.as_str();
            let Some(profile) = by_id.get(id) else {
                // Hallucinated ids are dropped, the rest of the batch survives
                warn!(profile_id = %id, "Ranking referenced an unknown profile, skipping");
                continue;
            };

            let mut metadata = SearchMetadata::new(entry.relevance_score, entry.reasoning)
                .with_matched_keywords(entry.matched_keywords);
            if let Some(archetype) = entry.archetype_match {
                metadata = metadata.with_archetype_match(archetype);
            }

            profiles.push(RankedProfile::new((*profile).clone(), metadata));
        }

        // Stable sort: model order breaks score ties
        profiles.sort_by(|a, b| {
            b.search_metadata
                .relevance_score
                .total_cmp(&a.search_metadata.relevance_score)
        });

        Ok(SearchResults::new(
            profiles,
            parsed.search_intent,
            parsed.suggested_filters,
            SearchSource::Remote,
        ))
    }
}

#[async_trait]
impl ProfileRanker for LlmProfileRanker {
    async fn rank(
        &self,
        query: &str,
        candidates: &[Profile],
    ) -> Result<SearchResults, SearchError> {
        if candidates.is_empty() {
            return Ok(SearchResults::empty(SearchSource::Remote));
        }

        let request = LlmRequest::builder()
            .system(self.build_system_prompt())
            .user(self.build_user_prompt(query, candidates))
            .temperature(RANKING_TEMPERATURE)
            .max_tokens(RANKING_MAX_TOKENS)
            .build();

        let response = self
            .provider
            .chat(&self.model, request)
            .await
            .map_err(|e| SearchError::remote_invocation(e.to_string()))?;

        debug!(model = %response.model, "Received ranking response");

        self.parse_ranking(response.content(), candidates)
    }

    async fn suggest(&self, query: &str) -> Result<Vec<String>, SearchError> {
        let request = LlmRequest::builder()
            .system(
                "Generate up to 4 short related search phrases for a directory of \
                 coaches, mentors, counselors and consultants. Respond with ONLY a \
                 JSON array of strings.",
            )
            .user(query.to_string())
            .temperature(SUGGESTION_TEMPERATURE)
            .max_tokens(SUGGESTION_MAX_TOKENS)
            .build();

        let response = self
            .provider
            .chat(&self.model, request)
            .await
            .map_err(|e| SearchError::remote_invocation(e.to_string()))?;

        let content = response.content();
        let json = extract_json_array(content)
            .ok_or_else(|| SearchError::response_parse("no JSON array in model response"))?;

        serde_json::from_str(json).map_err(|e| SearchError::response_parse(e.to_string()))
    }

    fn ranker_name(&self) -> &'static str {
        "llm"
    }
}

/// Extracts a JSON object from text that may contain markdown fences or prose
fn extract_json(content: &str) -> Option<&str> {
    let start = content.find('{')?;
    let end = content.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&content[start..=end])
}

/// Extracts a JSON array, for responses expected to be a bare list
fn extract_json_array(content: &str) -> Option<&str> {
    let start = content.find('[')?;
    let end = content.rfind(']')?;
    if end < start {
        return None;
    }
    Some(&content[start..=end])
}

#[derive(Debug, Deserialize)]
struct LlmRankingResponse {
    matches: Vec<LlmMatch>,
    #[serde(rename = "searchIntent", default)]
    search_intent: String,
    #[serde(rename = "suggestedFilters", default)]
    suggested_filters: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct LlmMatch {
    #[serde(rename = "wizardId", deserialize_with = "deserialize_id")]
    wizard_id: String,
    #[serde(rename = "relevanceScore")]
    relevance_score: f32,
    reasoning: String,
    #[serde(rename = "matchedKeywords")]
    matched_keywords: Vec<String>,
    #[serde(rename = "archetypeMatch")]
    archetype_match: Option<Archetype>,
}

/// Models sometimes emit numeric ids where the prompt asked for strings
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdRepr {
        Text(String),
        Number(i64),
    }

    match IdRepr::deserialize(deserializer)? {
        IdRepr::Text(s) => Ok(s),
        IdRepr::Number(n) => Ok(n.to_string()),
    }
}
