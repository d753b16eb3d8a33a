// Authenticator Port (Interface)

use crate::domain::{Credentials, Session};
use crate::port::ApiError;
use async_trait::async_trait;

/// Login/logout exchange with the platform
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Exchange credentials for a session
    ///
    /// # Errors
    /// - ApiError::Auth if the platform rejects the credentials
    /// - ApiError::Transport if the platform cannot be reached
    /// - ApiError::Decode if the token response is malformed
    async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError>;

    /// Revoke the session's access token
    async fn logout(&self, session: &Session) -> Result<(), ApiError>;
}

