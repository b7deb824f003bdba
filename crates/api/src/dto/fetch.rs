use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug)]
pub struct FetchRequest {
    pub url: String,

    /// Optional per-request fetch timeout; clamped to the configured maximum.
    #[serde(default)]
    pub timeout_ms: Option<u64>,

    #[serde(default)]
    pub max_redirects: Option<u32>,
}

#[derive(Serialize, Debug)]
pub struct FetchResponse {
    pub url: String,
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
    pub elapsed_ms: u64,
}
