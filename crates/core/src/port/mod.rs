// Port Layer - Interfaces for external dependencies

pub mod authenticator;
pub mod queue_api;
pub mod time_provider; // For deterministic session expiry

// Re-exports
pub use authenticator::Authenticator;
pub use queue_api::{ApiError, QueueApi};
pub use time_provider::{SystemTimeProvider, TimeProvider};
