pub mod admission;
pub mod errors;
pub mod guard;
pub mod logging;
pub mod root;
pub mod server;

pub use admission::AdmissionConfig;
pub use errors::ConfigError;
pub use guard::GuardConfig;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
