use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header::LOCATION;
use reqwest::redirect::Policy;
use tracing::{debug, info};

use pagegate_application::ports::PageFetcher;
use pagegate_application::use_cases::ValidateUrlUseCase;
use pagegate_domain::config::GuardConfig;
use pagegate_domain::{DomainError, FetchOptions, FetchedPage, ValidatedUrl, Verdict};

/// HTTP page fetcher with per-hop egress validation.
///
/// Automatic redirects are disabled; every redirect target goes back through
/// the egress guard before it is followed, which is the only point that
/// catches redirects into internal address space. Cookies are not stored, so
/// no state crosses from one fetch into the next.
pub struct HttpPageFetcher {
    client: reqwest::Client,
    guard: Arc<ValidateUrlUseCase>,
    default_timeout_ms: u64,
    max_timeout_ms: u64,
    max_redirects: u32,
}

impl HttpPageFetcher {
    pub fn new(config: &GuardConfig, guard: Arc<ValidateUrlUseCase>) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .redirect(Policy::none())
            .user_agent(concat!("pagegate/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DomainError::Internal(format!("HTTP client construction: {e}")))?;

        Ok(Self {
            client,
            guard,
            default_timeout_ms: config.fetch_timeout_ms,
            max_timeout_ms: config.fetch_timeout_max_ms,
            max_redirects: config.max_redirects,
        })
    }

    async fn follow(
        &self,
        mut current: ValidatedUrl,
        max_hops: u32,
    ) -> Result<FetchedPage, DomainError> {
        let start = Instant::now();
        let original = current.as_str().to_string();

        for hop in 0..=max_hops {
            let response = self
                .client
                .get(current.url.clone())
                .send()
                .await
                .map_err(|e| DomainError::FetchFailed {
                    url: current.as_str().to_string(),
                    reason: e.to_string(),
                })?;

            let status = response.status();

            if status.is_redirection() {
                let location = response
                    .headers()
                    .get(LOCATION)
                    .and_then(|v| v.to_str().ok())
                    .ok_or_else(|| DomainError::FetchFailed {
                        url: current.as_str().to_string(),
                        reason: format!("redirect status {status} without Location header"),
                    })?;

                let next = current.url.join(location).map_err(|e| {
                    DomainError::FetchFailed {
                        url: current.as_str().to_string(),
                        reason: format!("invalid redirect target '{location}': {e}"),
                    }
                })?;

                debug!(hop, from = %current.url, to = %next, "Following redirect");

                // Every hop goes back through the guard before it is sent.
                current = match self.guard.execute(next.as_str()).await {
                    Verdict::Allowed(target) => target,
                    Verdict::Denied(reason) => {
                        info!(url = %next, reason = %reason, "Blocked client request");
                        return Err(DomainError::EgressDenied(reason));
                    }
                };
                continue;
            }

            let content_type = response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);

            let final_url = current.as_str().to_string();
            let body = response
                .text()
                .await
                .map_err(|e| DomainError::FetchFailed {
                    url: final_url.clone(),
                    reason: format!("reading body: {e}"),
                })?;

            return Ok(FetchedPage {
                url: final_url,
                status: status.as_u16(),
                content_type,
                body,
                elapsed_ms: start.elapsed().as_millis() as u64,
            });
        }

        Err(DomainError::TooManyRedirects(original))
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(
        &self,
        target: &ValidatedUrl,
        options: &FetchOptions,
    ) -> Result<FetchedPage, DomainError> {
        let timeout = Duration::from_millis(
            options.effective_timeout_ms(self.default_timeout_ms, self.max_timeout_ms),
        );
        let max_hops = options.effective_max_redirects(self.max_redirects);
        let url = target.as_str().to_string();

        // The whole redirect chain shares one deadline; expiry aborts the
        // in-flight request rather than leaving it pending.
        match tokio::time::timeout(timeout, self.follow(target.clone(), max_hops)).await {
            Ok(result) => result,
            Err(_) => Err(DomainError::FetchTimeout(url)),
        }
    }
}
