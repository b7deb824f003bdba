use crate::{dto::CacheStatsResponse, state::AppState};
use axum::{extract::State, http::StatusCode, Json};
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_get_cache_stats")]
pub async fn get_cache_stats(State(state): State<AppState>) -> Json<CacheStatsResponse> {
    let snapshot = state.resolution_cache.stats();

    debug!(
        size = snapshot.size,
        hits = snapshot.hits,
        misses = snapshot.misses,
        "Resolution cache statistics retrieved"
    );

    Json(CacheStatsResponse {
        size: snapshot.size,
        max: snapshot.max_entries,
        hits: snapshot.hits,
        misses: snapshot.misses,
        insertions: snapshot.insertions,
        evictions: snapshot.evictions,
    })
}

#[instrument(skip(state), name = "api_clear_cache")]
pub async fn clear_cache(State(state): State<AppState>) -> StatusCode {
    state.resolution_cache.clear();
    StatusCode::NO_CONTENT
}
