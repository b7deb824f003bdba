mod validate_url;

pub use validate_url::ValidateUrlUseCase;
