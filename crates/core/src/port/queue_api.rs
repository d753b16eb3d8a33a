// Queue API Port (Interface)
// Remote call-queue collection reachable over an authenticated channel

use crate::domain::{QueueConfig, QueueSummary, QueueUpdate, Session};
use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by remote calls
///
/// Cloneable so per-queue outcomes can carry the failure that caused them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Login rejected or session missing/expired/revoked
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Network failure or unexpected HTTP status
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response body not parseable as the expected structure
    #[error("Decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// Short label used in logs and reports
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Auth(_) => "auth",
            ApiError::Transport(_) => "transport",
            ApiError::Decode(_) => "decode",
        }
    }
}

/// Call-queue collection on the remote platform
#[async_trait]
pub trait QueueApi: Send + Sync {
    /// List every call queue visible to the session (single page, server order)
    async fn list_queues(&self, session: &Session) -> Result<Vec<QueueSummary>, ApiError>;

    /// Fetch one queue's configuration
    async fn get_queue(&self, session: &Session, id: &str) -> Result<QueueConfig, ApiError>;

    /// Apply a partial update to one queue and return the updated configuration
    async fn update_queue(
        &self,
        session: &Session,
        id: &str,
        update: &QueueUpdate,
    ) -> Result<QueueConfig, ApiError>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::collections::{HashMap, HashSet};
    use std::sync::Mutex;

    /// A call received by the mock, in arrival order
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ApiCall {
        List,
        Get(String),
        Update(String, QueueUpdate),
    }

    /// In-memory QueueApi that records every call
    pub struct MockQueueApi {
        listing: Mutex<Result<Vec<QueueSummary>, ApiError>>,
        configs: Mutex<HashMap<String, QueueConfig>>,
        get_failures: Mutex<HashMap<String, ApiError>>,
        update_failures: Mutex<HashMap<String, ApiError>>,
        calls: Mutex<Vec<ApiCall>>,
    }

    impl MockQueueApi {
        /// Build a mock from (id, editableMemberStatus) pairs, listed in order
        pub fn with_queues(queues: &[(&str, Option<bool>)]) -> Self {
            let listing = queues.iter().map(|(id, _)| QueueSummary::new(*id)).collect();
            let configs = queues
                .iter()
                .map(|(id, flag)| (id.to_string(), QueueConfig::new(*id, *flag)))
                .collect();

            Self {
                listing: Mutex::new(Ok(listing)),
                configs: Mutex::new(configs),
                get_failures: Mutex::new(HashMap::new()),
                update_failures: Mutex::new(HashMap::new()),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn new_empty() -> Self {
            Self::with_queues(&[])
        }

        pub fn fail_listing(&self, error: ApiError) {
            *self.listing.lock().unwrap() = Err(error);
        }

        pub fn fail_get(&self, id: &str, error: ApiError) {
            self.get_failures.lock().unwrap().insert(id.to_string(), error);
        }

        pub fn fail_update(&self, id: &str, error: ApiError) {
            self.update_failures
                .lock()
                .unwrap()
                .insert(id.to_string(), error);
        }

        /// Replace the configuration served for an id
        pub fn set_config(&self, id: &str, config: QueueConfig) {
            self.configs.lock().unwrap().insert(id.to_string(), config);
        }

        pub fn calls(&self) -> Vec<ApiCall> {
            self.calls.lock().unwrap().clone()
        }

        pub fn get_calls(&self) -> Vec<String> {
            self.calls()
                .into_iter()
                .filter_map(|c| match c {
                    ApiCall::Get(id) => Some(id),
                    _ => None,
                })
                .collect()
        }

        pub fn update_calls(&self) -> Vec<(String, QueueUpdate)> {
            self.calls()
                .into_iter()
                .filter_map(|c| match c {
                    ApiCall::Update(id, body) => Some((id, body)),
                    _ => None,
                })
                .collect()
        }

        /// Ids whose stored flag is currently `true`
        pub fn editable_ids(&self) -> HashSet<String> {
            self.configs
                .lock()
                .unwrap()
                .values()
                .filter(|c| c.editable_member_status == Some(serde_json::Value::Bool(true)))
                .map(|c| c.id.clone())
                .collect()
        }
    }

    #[async_trait]
    impl QueueApi for MockQueueApi {
        async fn list_queues(&self, _session: &Session) -> Result<Vec<QueueSummary>, ApiError> {
            self.calls.lock().unwrap().push(ApiCall::List);
            self.listing.lock().unwrap().clone()
        }

        async fn get_queue(&self, _session: &Session, id: &str) -> Result<QueueConfig, ApiError> {
            self.calls.lock().unwrap().push(ApiCall::Get(id.to_string()));

            if let Some(err) = self.get_failures.lock().unwrap().get(id) {
                return Err(err.clone());
            }
            self.configs
                .lock()
                .unwrap()
                .get(id)
                .cloned()
                .ok_or_else(|| ApiError::Transport(format!("404 Not Found: {}", id)))
        }

        async fn update_queue(
            &self,
            _session: &Session,
            id: &str,
            update: &QueueUpdate,
        ) -> Result<QueueConfig, ApiError> {
            self.calls
                .lock()
                .unwrap()
                .push(ApiCall::Update(id.to_string(), update.clone()));

            if let Some(err) = self.update_failures.lock().unwrap().get(id) {
                return Err(err.clone());
            }
            let mut configs = self.configs.lock().unwrap();
            let config = configs
                .get_mut(id)
                .ok_or_else(|| ApiError::Transport(format!("404 Not Found: {}", id)))?;
            config.editable_member_status =
                Some(serde_json::Value::Bool(update.editable_member_status));
            Ok(config.clone())
        }
    }
}
