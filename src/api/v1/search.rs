//! Search endpoints

use axum::extract::State;
use tracing::info;

use crate::api::state::AppState;
use crate::api::types::{
    ApiError, Json, SearchRequest, SuggestionsRequest, SuggestionsResponse,
};
use crate::domain::SearchResults;

/// `POST /v1/search` - free-text directory search
pub async fn search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResults>, ApiError> {
    if request.query.trim().is_empty() {
        return Err(ApiError::bad_request("Search query must not be empty").with_param("query"));
    }

    let options = request.options();
    let results = state.search_service.search(&request.query, &options).await?;

    info!(
        query = %request.query,
        total = results.total_results,
        source = ?results.source,
        "Search completed"
    );

    Ok(Json(results))
}

/// `POST /v1/search/suggestions` - related search phrases
pub async fn suggestions(
    State(state): State<AppState>,
    Json(request): Json<SuggestionsRequest>,
) -> Result<Json<SuggestionsResponse>, ApiError> {
    let suggestions = state.search_service.suggestions(&request.query).await?;

    Ok(Json(SuggestionsResponse { suggestions }))
}
