// Application Layer - Use Cases

pub mod corrector;

// Re-exports
pub use corrector::{CorrectionMode, CorrectionReport, QueueCorrector, QueueOutcome, QueueReport};
