//! OAuth password-grant login against the platform

use crate::config::PlatformConfig;
use crate::error::{from_reqwest, read_json, status_error, Result};
use crate::types::TokenResponse;
use async_trait::async_trait;
use callqueue_core::domain::{Credentials, Session};
use callqueue_core::port::{ApiError, Authenticator, TimeProvider};
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use tracing::{debug, info};

pub const TOKEN_PATH: &str = "/restapi/oauth/token";
pub const REVOKE_PATH: &str = "/restapi/oauth/revoke";

/// Statuses the OAuth endpoints use for rejected credentials
const AUTH_STATUSES: &[StatusCode] = &[
    StatusCode::BAD_REQUEST,
    StatusCode::UNAUTHORIZED,
    StatusCode::FORBIDDEN,
];

/// Authenticator backed by the platform's OAuth endpoints
pub struct PlatformAuthenticator {
    http: Client,
    base_url: String,
    client_id: String,
    client_secret: String,
    time_provider: Arc<dyn TimeProvider>,
}

impl PlatformAuthenticator {
    pub fn new(config: &PlatformConfig, time_provider: Arc<dyn TimeProvider>) -> Result<Self> {
        Ok(Self {
            http: config.http_client()?,
            base_url: config.base_url()?,
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            time_provider,
        })
    }

    fn login_form<'a>(credentials: &'a Credentials) -> Vec<(&'static str, &'a str)> {
        let mut form = vec![
            ("grant_type", "password"),
            ("username", credentials.username.as_str()),
            ("password", credentials.password.as_str()),
        ];
        if let Some(extension) = credentials.extension.as_deref().filter(|e| !e.is_empty()) {
            form.push(("extension", extension));
        }
        form
    }
}

#[async_trait]
impl Authenticator for PlatformAuthenticator {
    async fn login(&self, credentials: &Credentials) -> std::result::Result<Session, ApiError> {
        debug!(username = %credentials.username, "Requesting access token");

        let requested_at = self.time_provider.now_millis();
        let response = self
            .http
            .post(format!("{}{}", self.base_url, TOKEN_PATH))
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&Self::login_form(credentials))
            .send()
            .await
            .map_err(from_reqwest)?;

        let token: TokenResponse = read_json(response, AUTH_STATUSES).await?;
        if token.access_token.is_empty() {
            return Err(ApiError::Decode("token response has an empty access_token".to_string()));
        }

        info!(
            owner_id = token.owner_id.as_deref().unwrap_or("-"),
            expires_in = token.expires_in,
            "Logged in"
        );

        Ok(Session {
            access_token: token.access_token,
            token_type: token.token_type,
            expires_at_millis: requested_at.saturating_add(token.expires_in.saturating_mul(1000)),
            refresh_token: token.refresh_token,
            owner_id: token.owner_id,
        })
    }

    async fn logout(&self, session: &Session) -> std::result::Result<(), ApiError> {
        let response = self
            .http
            .post(format!("{}{}", self.base_url, REVOKE_PATH))
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[("token", session.access_token.as_str())])
            .send()
            .await
            .map_err(from_reqwest)?;

        if !response.status().is_success() {
            return Err(status_error(response, AUTH_STATUSES).await);
        }

        info!("Logged out");
        Ok(())
    }
}
