use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{Archetype, DomainError, Profile, ProfileId, ProfileRepository};

/// In-memory profile repository
#[derive(Debug, Default)]
pub struct InMemoryProfileRepository {
    profiles: RwLock<HashMap<ProfileId, Profile>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profiles(profiles: Vec<Profile>) -> Self {
        let map = profiles.into_iter().map(|p| (p.id.clone(), p)).collect();
        Self {
            profiles: RwLock::new(map),
        }
    }

    pub async fn insert(&self, profile: Profile) {
        self.profiles
            .write()
            .await
            .insert(profile.id.clone(), profile);
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn list_approved(
        &self,
        archetype: Option<Archetype>,
    ) -> Result<Vec<Profile>, DomainError> {
        let profiles = self.profiles.read().await;

        let mut listed: Vec<Profile> = profiles
            .values()
            .filter(|p| p.approved)
            .filter(|p| archetype.is_none_or(|a| p.archetype == a))
            .cloned()
            .collect();

        // Stable directory order: best-rated first, id as tiebreaker
        listed.sort_by(|a, b| {
            b.rating
                .total_cmp(&a.rating)
                .then_with(|| a.id.as_str().cmp(b.id.as_str()))
        });

        Ok(listed)
    }

    async fn get(&self, id: &ProfileId) -> Result<Option<Profile>, DomainError> {
        Ok(self.profiles.read().await.get(id).cloned())
    }
}
