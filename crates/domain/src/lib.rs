//! PageGate Domain Layer
pub mod address;
pub mod clock;
pub mod config;
pub mod errors;
pub mod fetch;
pub mod verdict;

pub use address::{forbidden_category, AddressCategory};
pub use config::{CliOverrides, Config};
pub use errors::DomainError;
pub use fetch::{FetchOptions, FetchedPage};
pub use verdict::{DenyReason, ValidatedUrl, Verdict};
