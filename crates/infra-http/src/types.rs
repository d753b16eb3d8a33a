//! Platform wire types
//!
//! Shapes of the OAuth and error bodies returned by the platform. Queue
//! resources themselves are decoded straight into core domain types.

use serde::Deserialize;

/// Successful response of `POST /restapi/oauth/token`
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,

    #[serde(default)]
    pub token_type: String,

    /// Access token lifetime in seconds
    pub expires_in: i64,

    #[serde(default)]
    pub refresh_token: Option<String>,

    #[serde(default)]
    pub owner_id: Option<String>,
}

/// Error body, covering both the OAuth and the REST flavours
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformErrorBody {
    #[serde(default)]
    pub error_code: Option<String>,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default, rename = "error")]
    pub oauth_error: Option<String>,

    #[serde(default, rename = "error_description")]
    pub error_description: Option<String>,

    #[serde(default)]
    pub errors: Vec<PlatformErrorItem>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformErrorItem {
    #[serde(default)]
    pub error_code: Option<String>,

    #[serde(default)]
    pub message: Option<String>,
}

impl PlatformErrorBody {
    /// Most specific human-readable message in the body
    pub fn describe(&self) -> Option<String> {
        let message = self
            .error_description
            .clone()
            .or_else(|| self.message.clone())
            .or_else(|| self.errors.iter().find_map(|e| e.message.clone()))
            .or_else(|| self.oauth_error.clone())?;

        let code = self
            .error_code
            .clone()
            .or_else(|| self.errors.iter().find_map(|e| e.error_code.clone()));

        Some(match code {
            Some(code) => format!("{} ({})", message, code),
            None => message,
        })
    }
}
