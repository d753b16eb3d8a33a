//! Runtime settings: optional TOML file, then `CALLQUEUE_*` environment variables

use callqueue_core::domain::Credentials;
use callqueue_core::AppError;
use callqueue_infra_http::{PlatformConfig, DEFAULT_REQUEST_TIMEOUT, DEFAULT_SERVER_URL};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const ENV_PREFIX: &str = "CALLQUEUE";
pub const DEFAULT_CONFIG_PATH: &str = "~/.callqueue/config.toml";

#[derive(Clone, Deserialize)]
pub struct Settings {
    pub server_url: String,

    #[serde(default)]
    pub client_id: String,

    #[serde(default)]
    pub client_secret: String,

    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,

    #[serde(default)]
    pub extension: Option<String>,

    pub request_timeout_secs: u64,
}

impl Settings {
    /// Load settings; a missing file is not an error, missing keys are
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = Self::defaults()?;
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(false));
        }
        let builder = builder.add_source(Environment::with_prefix(ENV_PREFIX));

        Self::build(builder)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, config::ConfigError> {
        Config::builder()
            .set_default("server_url", DEFAULT_SERVER_URL)?
            .set_default("request_timeout_secs", DEFAULT_REQUEST_TIMEOUT.as_secs())
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> anyhow::Result<Self> {
        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), AppError> {
        let required = [
            ("server_url", &self.server_url),
            ("client_id", &self.client_id),
            ("client_secret", &self.client_secret),
            ("username", &self.username),
            ("password", &self.password),
        ];

        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(AppError::Config(format!(
                    "`{}` is not set (config key `{}` or env {}_{})",
                    key,
                    key,
                    ENV_PREFIX,
                    key.to_uppercase()
                )));
            }
        }

        if self.request_timeout_secs == 0 {
            return Err(AppError::Validation(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
            extension: self.extension.clone().filter(|e| !e.trim().is_empty()),
        }
    }

    pub fn platform_config(&self) -> PlatformConfig {
        PlatformConfig::new(&self.server_url, &self.client_id, &self.client_secret)
            .with_request_timeout(Duration::from_secs(self.request_timeout_secs))
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("server_url", &self.server_url)
            .field("client_id", &self.client_id)
            .field("username", &self.username)
            .field("extension", &self.extension)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish_non_exhaustive()
    }
}
