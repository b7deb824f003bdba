pub mod admission;
pub mod cache;
pub mod fetch;
pub mod health;
pub mod validate;

pub use admission::{clear_admission, get_admission_stats};
pub use cache::{clear_cache, get_cache_stats};
pub use fetch::fetch_page;
pub use health::health_check;
pub use validate::validate_url;
