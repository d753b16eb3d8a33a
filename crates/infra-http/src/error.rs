//! Error mapping for the platform adapters

use crate::types::PlatformErrorBody;
use callqueue_core::port::ApiError;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Adapter construction errors
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to create HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, HttpError>;

/// Convert a failed send into a transport (or decode) error
pub(crate) fn from_reqwest(err: reqwest::Error) -> ApiError {
    if err.is_decode() {
        ApiError::Decode(err.to_string())
    } else {
        ApiError::Transport(err.to_string())
    }
}

/// Build the error for a non-success response
///
/// `auth_statuses` lists the codes that mean the credentials/session were
/// rejected; every other status is a transport failure.
pub(crate) async fn status_error(response: Response, auth_statuses: &[StatusCode]) -> ApiError {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<PlatformErrorBody>(&text)
        .ok()
        .and_then(|body| body.describe())
        .unwrap_or(text);

    let message = if detail.is_empty() {
        status.to_string()
    } else {
        format!("{}: {}", status, detail)
    };

    if auth_statuses.contains(&status) {
        ApiError::Auth(message)
    } else {
        ApiError::Transport(message)
    }
}

/// Decode a successful response body, or map the failure
pub(crate) async fn read_json<T: DeserializeOwned>(
    response: Response,
    auth_statuses: &[StatusCode],
) -> std::result::Result<T, ApiError> {
    if !response.status().is_success() {
        return Err(status_error(response, auth_statuses).await);
    }

    let bytes = response.bytes().await.map_err(from_reqwest)?;
    serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
}
