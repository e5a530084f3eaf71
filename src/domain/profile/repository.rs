//! Profile store boundary
//!
//! The search core consumes repository output as its candidate list and makes
//! no assumptions about the storage technology behind it.

use std::fmt::Debug;

use async_trait::async_trait;

use super::{Archetype, Profile, ProfileId};
use crate::domain::DomainError;

/// Read-side boundary to the profile store
#[async_trait]
pub trait ProfileRepository: Send + Sync + Debug {
    /// List approved profiles, optionally filtered by archetype
    async fn list_approved(
        &self,
        archetype: Option<Archetype>,
    ) -> Result<Vec<Profile>, DomainError>;

    /// Get a single profile by identifier
    async fn get(&self, id: &ProfileId) -> Result<Option<Profile>, DomainError>;
}
