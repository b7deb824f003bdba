pub mod admission;
pub mod cache;
pub mod fetch;
pub mod health;
pub mod validate;

pub use admission::AdmissionStatsResponse;
pub use cache::CacheStatsResponse;
pub use fetch::{FetchRequest, FetchResponse};
pub use health::HealthResponse;
pub use validate::{ValidateRequest, ValidateResponse};
