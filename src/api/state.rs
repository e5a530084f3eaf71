use std::sync::Arc;

use crate::domain::ProfileRepository;
use crate::infrastructure::search::ProfileSearchService;

/// Shared application state for the API layer
#[derive(Debug, Clone)]
pub struct AppState {
    pub search_service: Arc<ProfileSearchService>,
    pub profile_repository: Arc<dyn ProfileRepository>,
}

impl AppState {
    pub fn new(
        search_service: Arc<ProfileSearchService>,
        profile_repository: Arc<dyn ProfileRepository>,
    ) -> Self {
        Self {
            search_service,
            profile_repository,
        }
    }
}
