use std::net::IpAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::util::ServiceExt;

use pagegate_api::{create_api_routes, AppState};
use pagegate_application::ports::{HostResolver, PageFetcher};
use pagegate_application::use_cases::{
    AdmitRequestUseCase, FetchPageUseCase, ValidateUrlUseCase,
};
use pagegate_domain::{DomainError, FetchOptions, FetchedPage, ValidatedUrl};
use pagegate_infrastructure::{ResolutionCache, SlidingWindowStore};

struct NoDnsResolver;

#[async_trait]
impl HostResolver for NoDnsResolver {
    async fn lookup_ipv4(&self, host: &str) -> Result<Vec<IpAddr>, DomainError> {
        Err(DomainError::Resolver(format!("{host}: no resolver in test")))
    }

    async fn lookup_ipv6(&self, host: &str) -> Result<Vec<IpAddr>, DomainError> {
        Err(DomainError::Resolver(format!("{host}: no resolver in test")))
    }
}

struct StubFetcher;

#[async_trait]
impl PageFetcher for StubFetcher {
    async fn fetch(
        &self,
        target: &ValidatedUrl,
        _options: &FetchOptions,
    ) -> Result<FetchedPage, DomainError> {
        Ok(FetchedPage {
            url: target.as_str().to_string(),
            status: 200,
            content_type: Some("text/html".to_string()),
            body: "<html></html>".to_string(),
            elapsed_ms: 1,
        })
    }
}

fn test_app(max_requests: u32) -> axum::Router {
    let cache = Arc::new(ResolutionCache::new(64, Duration::from_secs(300)));
    let store = Arc::new(SlidingWindowStore::new(max_requests, 60_000, 100));
    let validate = Arc::new(ValidateUrlUseCase::new(Arc::new(NoDnsResolver), cache.clone()));
    let fetch = Arc::new(FetchPageUseCase::new(validate.clone(), Arc::new(StubFetcher)));

    create_api_routes(AppState {
        admit: Arc::new(AdmitRequestUseCase::new(store.clone())),
        validate,
        fetch,
        resolution_cache: cache,
        admission_store: store,
        started_at: Instant::now(),
    })
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, identity: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("x-forwarded-for", identity)
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = test_app(5);

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_validate_reports_denial_in_payload() {
    let app = test_app(5);

    let response = app
        .oneshot(post_json(
            "/validate",
            "1.2.3.4",
            serde_json::json!({ "url": "http://127.0.0.1/" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["ok"], false);
    let reason = body["reason"].as_str().unwrap();
    assert!(reason.contains("127.0.0.1"), "reason: {reason}");
    assert!(reason.contains("loopback"), "reason: {reason}");
}

#[tokio::test]
async fn test_validate_allows_public_literal() {
    let app = test_app(5);

    let response = app
        .oneshot(post_json(
            "/validate",
            "1.2.3.4",
            serde_json::json!({ "url": "https://93.184.216.34/page" }),
        ))
        .await
        .unwrap();

    let body = json_body(response).await;
    assert_eq!(body["ok"], true);
    assert!(body.get("reason").is_none());
}

#[tokio::test]
async fn test_fetch_denied_target_is_bad_request() {
    let app = test_app(5);

    let response = app
        .oneshot(post_json(
            "/fetch",
            "1.2.3.4",
            serde_json::json!({ "url": "http://[::1]/admin" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body["error"].as_str().unwrap().contains("forbidden range"));
}

#[tokio::test]
async fn test_fetch_allowed_target_returns_page() {
    let app = test_app(5);

    let response = app
        .oneshot(post_json(
            "/fetch",
            "1.2.3.4",
            serde_json::json!({ "url": "http://93.184.216.34/" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], 200);
    assert_eq!(body["body"], "<html></html>");
}

#[tokio::test]
async fn test_fetch_over_limit_is_rate_limited() {
    let app = test_app(2);

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(post_json(
                "/fetch",
                "9.9.9.9",
                serde_json::json!({ "url": "http://93.184.216.34/" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .oneshot(post_json(
            "/fetch",
            "9.9.9.9",
            serde_json::json!({ "url": "http://93.184.216.34/" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(response.headers().contains_key("retry-after"));
    let body = json_body(response).await;
    assert!(body["retry_after_secs"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn test_rate_limit_isolates_identities() {
    let app = test_app(1);

    let first = app
        .clone()
        .oneshot(post_json(
            "/fetch",
            "8.8.8.8",
            serde_json::json!({ "url": "http://93.184.216.34/" }),
        ))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    // A different caller still has budget.
    let other = app
        .oneshot(post_json(
            "/fetch",
            "8.8.4.4",
            serde_json::json!({ "url": "http://93.184.216.34/" }),
        ))
        .await
        .unwrap();
    assert_eq!(other.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_cache_stats_and_clear() {
    let app = test_app(5);

    let stats = app
        .clone()
        .oneshot(Request::get("/cache/stats").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(stats.status(), StatusCode::OK);
    let body = json_body(stats).await;
    assert_eq!(body["size"], 0);
    assert_eq!(body["max"], 64);

    let clear = app
        .oneshot(
            Request::post("/cache/clear")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(clear.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_admission_stats_endpoint() {
    let app = test_app(5);

    let response = app
        .oneshot(
            Request::get("/admission/stats")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["size"], 0);
    assert_eq!(body["max"], 100);
}
