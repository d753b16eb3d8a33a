//! Call-queue REST adapter

use crate::config::PlatformConfig;
use crate::error::{from_reqwest, read_json, HttpError, Result};
use async_trait::async_trait;
use callqueue_core::domain::{
    validate_queue_id, QueueConfig, QueueList, QueueSummary, QueueUpdate, Session,
};
use callqueue_core::port::{ApiError, QueueApi, TimeProvider};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use std::sync::Arc;
use tracing::debug;

pub const CALL_QUEUES_PATH: &str = "/restapi/v1.0/account/~/call-queues";

const AUTH_STATUSES: &[StatusCode] = &[StatusCode::UNAUTHORIZED, StatusCode::FORBIDDEN];

/// QueueApi over the platform's REST interface
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use callqueue_core::port::{QueueApi, SystemTimeProvider};
/// use callqueue_infra_http::{PlatformClient, PlatformConfig};
///
/// # async fn example(session: callqueue_core::domain::Session) -> Result<(), Box<dyn std::error::Error>> {
/// let config = PlatformConfig::new("https://platform.ringcentral.com", "client-id", "client-secret");
/// let client = PlatformClient::new(&config, Arc::new(SystemTimeProvider))?;
/// for queue in client.list_queues(&session).await? {
///     println!("{}", queue.id);
/// }
/// # Ok(())
/// # }
/// ```
pub struct PlatformClient {
    http: Client,
    collection_url: Url,
    time_provider: Arc<dyn TimeProvider>,
}

impl PlatformClient {
    pub fn new(config: &PlatformConfig, time_provider: Arc<dyn TimeProvider>) -> Result<Self> {
        let raw = format!("{}{}", config.base_url()?, CALL_QUEUES_PATH);
        let collection_url =
            Url::parse(&raw).map_err(|e| HttpError::InvalidUrl(format!("{}: {}", raw, e)))?;
        if collection_url.cannot_be_a_base() {
            return Err(HttpError::InvalidUrl(raw));
        }

        Ok(Self {
            http: config.http_client()?,
            collection_url,
            time_provider,
        })
    }

    /// Resource URL of one queue, with the id as a single encoded path segment
    fn queue_url(&self, id: &str) -> std::result::Result<Url, ApiError> {
        validate_queue_id(id).map_err(|e| ApiError::Decode(e.to_string()))?;

        let mut url = self.collection_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Decode(format!("cannot extend {}", self.collection_url)))?
            .pop_if_empty()
            .push(id);
        Ok(url)
    }

    /// Start an authorized request, failing fast on an expired session
    fn request(
        &self,
        session: &Session,
        method: Method,
        url: Url,
    ) -> std::result::Result<RequestBuilder, ApiError> {
        if session.is_expired(self.time_provider.now_millis()) {
            return Err(ApiError::Auth("session expired".to_string()));
        }

        debug!(method = %method, url = %url, "Platform request");
        Ok(self
            .http
            .request(method, url)
            .header(AUTHORIZATION, session.authorization())
            .header(ACCEPT, "application/json"))
    }
}

#[async_trait]
impl QueueApi for PlatformClient {
    async fn list_queues(
        &self,
        session: &Session,
    ) -> std::result::Result<Vec<QueueSummary>, ApiError> {
        let response = self
            .request(session, Method::GET, self.collection_url.clone())?
            .send()
            .await
            .map_err(from_reqwest)?;

        let list: QueueList = read_json(response, AUTH_STATUSES).await?;
        Ok(list.records)
    }

    async fn get_queue(
        &self,
        session: &Session,
        id: &str,
    ) -> std::result::Result<QueueConfig, ApiError> {
        let response = self
            .request(session, Method::GET, self.queue_url(id)?)?
            .send()
            .await
            .map_err(from_reqwest)?;

        read_json(response, AUTH_STATUSES).await
    }

    async fn update_queue(
        &self,
        session: &Session,
        id: &str,
        update: &QueueUpdate,
    ) -> std::result::Result<QueueConfig, ApiError> {
        let response = self
            .request(session, Method::PUT, self.queue_url(id)?)?
            .json(update)
            .send()
            .await
            .map_err(from_reqwest)?;

        read_json(response, AUTH_STATUSES).await
    }
}
