//! Profile directory endpoints

use std::str::FromStr;

use axum::extract::{Path, Query, State};
use serde::Deserialize;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::{Archetype, Profile, ProfileId};

#[derive(Debug, Deserialize)]
pub struct ListProfilesQuery {
    pub archetype: Option<String>,
}

/// `GET /v1/profiles` - approved directory listing, best-rated first
pub async fn list_profiles(
    State(state): State<AppState>,
    Query(params): Query<ListProfilesQuery>,
) -> Result<Json<Vec<Profile>>, ApiError> {
    let archetype = params
        .archetype
        .as_deref()
        .map(Archetype::from_str)
        .transpose()
        .map_err(|e| ApiError::bad_request(e.to_string()).with_param("archetype"))?;

    let profiles = state.profile_repository.list_approved(archetype).await?;

    Ok(Json(profiles))
}

/// `GET /v1/profiles/{id}` - single profile lookup
pub async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Profile>, ApiError> {
    let id = ProfileId::new(id)
        .map_err(|e| ApiError::bad_request(e.to_string()).with_param("id"))?;

    let profile = state
        .profile_repository
        .get(&id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Profile '{}' not found", id)))?;

    Ok(Json(profile))
}
