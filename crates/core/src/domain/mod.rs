// Domain Layer - Pure data types for call queues and sessions

pub mod error;
pub mod queue;
pub mod session;

// Re-exports
pub use error::{validate_queue_id, DomainError};
pub use queue::{QueueConfig, QueueId, QueueList, QueueSummary, QueueUpdate};
pub use session::{Credentials, Session};
