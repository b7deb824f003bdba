//! PageGate Application Layer
//!
//! Ports (traits the infrastructure adapters implement) and use cases
//! (the egress guard, admission limiter, and fetch orchestration).
pub mod ports;
pub mod use_cases;
