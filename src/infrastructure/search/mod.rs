//! Search infrastructure - dispatcher, remote ranker and fallback scorer

pub mod fallback;
pub mod llm_ranker;
pub mod service;

pub use fallback::FallbackScorer;
pub use llm_ranker::LlmProfileRanker;
pub use service::ProfileSearchService;
