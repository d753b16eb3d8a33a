//! Callqueue HTTP adapters
//!
//! reqwest implementations of the core `Authenticator` and `QueueApi` ports
//! for the telephony platform's REST API.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use callqueue_core::domain::Credentials;
//! use callqueue_core::port::{Authenticator, SystemTimeProvider};
//! use callqueue_infra_http::{PlatformAuthenticator, PlatformConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PlatformConfig::new("https://platform.ringcentral.com", "client-id", "client-secret");
//!     let auth = PlatformAuthenticator::new(&config, Arc::new(SystemTimeProvider))?;
//!
//!     let session = auth
//!         .login(&Credentials {
//!             username: "+15551234567".to_string(),
//!             password: "password".to_string(),
//!             extension: None,
//!         })
//!         .await?;
//!
//!     auth.logout(&session).await?;
//!     Ok(())
//! }
//! ```

mod auth;
mod client;
mod config;
mod error;
mod types;

pub use auth::{PlatformAuthenticator, REVOKE_PATH, TOKEN_PATH};
pub use client::{PlatformClient, CALL_QUEUES_PATH};
pub use config::{PlatformConfig, DEFAULT_REQUEST_TIMEOUT, DEFAULT_SERVER_URL};
pub use error::{HttpError, Result};
pub use types::{PlatformErrorBody, TokenResponse};
