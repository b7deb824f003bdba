use crate::{
    dto::{FetchRequest, FetchResponse},
    errors::ApiError,
    identity::CallerIdentity,
    state::AppState,
};
use axum::{extract::State, Json};
use pagegate_domain::{clock::now_unix_ms, DomainError, FetchOptions};
use tracing::{debug, instrument};

#[instrument(skip(state, request), name = "api_fetch_page")]
pub async fn fetch_page(
    State(state): State<AppState>,
    identity: CallerIdentity,
    Json(request): Json<FetchRequest>,
) -> Result<Json<FetchResponse>, ApiError> {
    debug!(identity = %identity.0, url = %request.url, "Fetch requested");

    let decision = state.admit.execute(&identity.0, now_unix_ms());
    if !decision.allowed {
        return Err(ApiError(DomainError::AdmissionDenied {
            retry_after_secs: decision.retry_after_secs.unwrap_or(1),
        }));
    }

    let options = FetchOptions {
        timeout_ms: request.timeout_ms,
        max_redirects: request.max_redirects,
    };

    let page = state.fetch.execute(&request.url, &options).await?;

    Ok(Json(FetchResponse {
        url: page.url,
        status: page.status,
        content_type: page.content_type,
        body: page.body,
        elapsed_ms: page.elapsed_ms,
    }))
}
