// Session Domain Model

use serde::{Deserialize, Serialize};

/// Default token type when the platform omits it
pub const DEFAULT_TOKEN_TYPE: &str = "bearer";

/// Login principal (never hardcoded, injected from configuration)
#[derive(Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,

    #[serde(default)]
    pub extension: Option<String>,
}

// Keep the password out of logs
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .field("extension", &self.extension)
            .finish()
    }
}

/// Authenticated session returned by login
///
/// Immutable after login; passed by reference to every remote call.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    pub token_type: String,
    pub expires_at_millis: i64,
    pub refresh_token: Option<String>,
    pub owner_id: Option<String>,
}

impl Session {
    /// Value of the `Authorization` header for this session
    pub fn authorization(&self) -> String {
        let scheme = if self.token_type.is_empty() {
            DEFAULT_TOKEN_TYPE
        } else {
            self.token_type.as_str()
        };
        format!("{} {}", scheme, self.access_token)
    }

    pub fn is_expired(&self, now_millis: i64) -> bool {
        now_millis >= self.expires_at_millis
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token_type", &self.token_type)
            .field("expires_at_millis", &self.expires_at_millis)
            .field("owner_id", &self.owner_id)
            .finish_non_exhaustive()
    }
}
