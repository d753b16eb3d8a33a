//! Connection settings shared by the platform adapters

use crate::error::{HttpError, Result};
use reqwest::{Client, Url};
use std::time::Duration;

pub const DEFAULT_SERVER_URL: &str = "https://platform.ringcentral.com";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Where and how to reach the platform
#[derive(Debug, Clone)]
pub struct PlatformConfig {
    pub server_url: String,
    pub client_id: String,
    pub client_secret: String,
    pub request_timeout: Duration,
}

impl PlatformConfig {
    pub fn new(
        server_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            server_url: server_url.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Validated server URL without a trailing slash
    pub(crate) fn base_url(&self) -> Result<String> {
        let url = Url::parse(&self.server_url)
            .map_err(|e| HttpError::InvalidUrl(format!("{}: {}", self.server_url, e)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(HttpError::InvalidUrl(format!(
                "{}: unsupported scheme",
                self.server_url
            )));
        }

        Ok(self.server_url.trim_end_matches('/').to_string())
    }

    pub(crate) fn http_client(&self) -> Result<Client> {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(self.request_timeout)
            .user_agent(concat!("callqueue/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(client)
    }
}
