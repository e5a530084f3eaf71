//! Request/response bodies for the search endpoints

use serde::{Deserialize, Serialize};

use crate::domain::{Archetype, SearchOptions};

/// Body of `POST /v1/search`
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(default)]
    pub archetype: Option<Archetype>,
    #[serde(default)]
    pub max_results: Option<usize>,
}

impl SearchRequest {
    pub fn options(&self) -> SearchOptions {
        let mut options = SearchOptions::new();
        if let Some(archetype) = self.archetype {
            options = options.with_archetype(archetype);
        }
        if let Some(max) = self.max_results {
            options = options.with_max_results(max);
        }
        options
    }
}

/// Body of `POST /v1/search/suggestions`
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionsRequest {
    pub query: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<String>,
}
