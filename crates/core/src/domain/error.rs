// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid queue id: {0:?}")]
    InvalidQueueId(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;

/// Reject ids that cannot be placed in a resource path as-is
///
/// Dot segments are rejected because URL normalisation would resolve them
/// against the collection path.
pub fn validate_queue_id(id: &str) -> Result<()> {
    if id.is_empty()
        || id == "."
        || id == ".."
        || id.contains('/')
        || id.chars().any(char::is_whitespace)
    {
        return Err(DomainError::InvalidQueueId(id.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_queue_id() {
        assert!(validate_queue_id("1234567").is_ok());
        assert!(validate_queue_id("").is_err());
        assert!(validate_queue_id("12/34").is_err());
        assert!(validate_queue_id("12 34").is_err());
    }

    #[test]
    fn test_dot_segments_are_rejected() {
        assert!(validate_queue_id(".").is_err());
        assert!(validate_queue_id("..").is_err());
        // Only whole dot segments are special
        assert!(validate_queue_id("1.2").is_ok());
        assert!(validate_queue_id("...").is_ok());
    }
}
