use crate::{dto::AdmissionStatsResponse, state::AppState};
use axum::{extract::State, http::StatusCode, Json};
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_get_admission_stats")]
pub async fn get_admission_stats(State(state): State<AppState>) -> Json<AdmissionStatsResponse> {
    let snapshot = state.admission_store.stats();

    debug!(
        tracked = snapshot.tracked_identities,
        allowed = snapshot.allowed,
        denied = snapshot.denied,
        "Admission statistics retrieved"
    );

    Json(AdmissionStatsResponse {
        size: snapshot.tracked_identities,
        max: snapshot.max_identities,
        allowed: snapshot.allowed,
        denied: snapshot.denied,
        evictions: snapshot.evictions,
    })
}

#[instrument(skip(state), name = "api_clear_admission")]
pub async fn clear_admission(State(state): State<AppState>) -> StatusCode {
    state.admission_store.clear();
    StatusCode::NO_CONTENT
}
