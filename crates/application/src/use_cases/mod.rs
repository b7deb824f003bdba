pub mod admission;
pub mod fetch;
pub mod guard;

// Re-export use cases
pub use admission::AdmitRequestUseCase;
pub use fetch::FetchPageUseCase;
pub use guard::ValidateUrlUseCase;
