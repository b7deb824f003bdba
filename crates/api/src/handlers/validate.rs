use crate::{
    dto::{ValidateRequest, ValidateResponse},
    state::AppState,
};
use axum::{extract::State, Json};
use pagegate_domain::Verdict;
use tracing::{debug, instrument};

/// Introspection endpoint: runs a URL through the egress guard without
/// fetching. Denials are part of the payload, not an error status.
#[instrument(skip(state, request), name = "api_validate_url")]
pub async fn validate_url(
    State(state): State<AppState>,
    Json(request): Json<ValidateRequest>,
) -> Json<ValidateResponse> {
    match state.validate.execute(&request.url).await {
        Verdict::Allowed(target) => {
            debug!(url = %target.as_str(), "Validation allowed");
            Json(ValidateResponse {
                ok: true,
                reason: None,
            })
        }
        Verdict::Denied(reason) => {
            debug!(url = %request.url, reason = %reason, "Validation denied");
            Json(ValidateResponse {
                ok: false,
                reason: Some(reason.to_string()),
            })
        }
    }
}
