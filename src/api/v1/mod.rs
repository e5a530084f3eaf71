//! Versioned public API

pub mod profiles;
pub mod search;

use axum::{
    routing::{get, post},
    Router,
};

use super::state::AppState;

pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/search", post(search::search))
        .route("/search/suggestions", post(search::suggestions))
        .route("/profiles", get(profiles::list_profiles))
        .route("/profiles/{id}", get(profiles::get_profile))
}
