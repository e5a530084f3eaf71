//! Search options and cache key construction

use serde::{Deserialize, Serialize};

use crate::domain::profile::Archetype;

/// Options accompanying a free-text directory search
///
/// Every field participates in the cache key, so two searches with the same
/// query but different options never share an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Restrict candidates to one archetype
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archetype: Option<Archetype>,
    /// Cap the number of returned results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<usize>,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_archetype(mut self, archetype: Archetype) -> Self {
        self.archetype = Some(archetype);
        self
    }

    pub fn with_max_results(mut self, max: usize) -> Self {
        self.max_results = Some(max);
        self
    }

    /// Deterministic cache key combining the literal query with the options
    ///
    /// Components appear in a fixed order so equal (query, options) pairs
    /// always map to the same key.
    pub fn cache_key(&self, query: &str) -> String {
        let mut parts = vec![format!("search:{}", query)];

        if let Some(archetype) = self.archetype {
            parts.push(format!("archetype={}", archetype));
        }

        if let Some(max) = self.max_results {
            parts.push(format!("max_results={}", max));
        }

        parts.join(":")
    }
}
