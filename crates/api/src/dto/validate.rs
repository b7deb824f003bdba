use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug)]
pub struct ValidateRequest {
    pub url: String,
}

#[derive(Serialize, Debug)]
pub struct ValidateResponse {
    pub ok: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
