//! Domain layer - Core entities and boundaries

pub mod cache;
pub mod error;
pub mod llm;
pub mod profile;
pub mod search;

pub use cache::{Cache, CacheExt};
pub use error::DomainError;
pub use llm::{
    FinishReason, LlmProvider, LlmRequest, LlmRequestBuilder, LlmResponse, Message, MessageRole,
    Usage,
};
pub use profile::{
    validate_profile_id, Archetype, Profile, ProfileId, ProfileRepository, ProfileValidationError,
};
pub use search::{
    ProfileRanker, RankedProfile, SearchError, SearchMetadata, SearchOptions, SearchResults,
    SearchSource,
};
