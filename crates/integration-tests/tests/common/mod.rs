//! In-process fake of the telephony platform's REST API.
//!
//! Serves the OAuth token/revoke endpoints and the call-queue collection
//! from memory, and records every request it receives.

#![allow(dead_code)]

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use callqueue_core::domain::Credentials;
use callqueue_core::port::SystemTimeProvider;
use callqueue_infra_http::{PlatformAuthenticator, PlatformClient, PlatformConfig};
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub const CLIENT_ID: &str = "test-client";
pub const CLIENT_SECRET: &str = "test-secret";
pub const USERNAME: &str = "+15551234567";
pub const PASSWORD: &str = "correct-horse";
pub const ACCESS_TOKEN: &str = "fake-access-token";

/// A request as seen by the fake platform
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Default)]
struct Inner {
    queues: Vec<Value>,
    requests: Vec<Recorded>,
    login_forms: Vec<HashMap<String, String>>,
    failing_gets: HashSet<String>,
    garbled_gets: HashSet<String>,
    listing_without_records: bool,
    revoked: bool,
}

#[derive(Clone, Default)]
pub struct FakePlatform {
    inner: Arc<Mutex<Inner>>,
}

impl FakePlatform {
    /// Platform holding queues with the given (id, editableMemberStatus) values
    pub fn with_queues(queues: &[(&str, Value)]) -> Self {
        let platform = Self::default();
        {
            let mut inner = platform.inner.lock().unwrap();
            inner.queues = queues
                .iter()
                .map(|(id, flag)| {
                    let mut queue = json!({
                        "id": id,
                        "name": format!("Queue {}", id),
                        "extensionNumber": format!("3{}", id),
                        "status": "Enabled",
                    });
                    if !flag.is_null() {
                        queue["editableMemberStatus"] = flag.clone();
                    }
                    queue
                })
                .collect();
        }
        platform
    }

    pub fn fail_get(&self, id: &str) {
        self.inner.lock().unwrap().failing_gets.insert(id.to_string());
    }

    pub fn garble_get(&self, id: &str) {
        self.inner.lock().unwrap().garbled_gets.insert(id.to_string());
    }

    pub fn drop_records_from_listing(&self) {
        self.inner.lock().unwrap().listing_without_records = true;
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.inner.lock().unwrap().requests.clone()
    }

    /// Requests against the call-queue collection, as "METHOD path"
    pub fn queue_requests(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .filter(|r| r.path.contains("/call-queues"))
            .map(|r| format!("{} {}", r.method, r.path))
            .collect()
    }

    pub fn puts(&self) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == "PUT")
            .collect()
    }

    pub fn login_forms(&self) -> Vec<HashMap<String, String>> {
        self.inner.lock().unwrap().login_forms.clone()
    }

    pub fn was_revoked(&self) -> bool {
        self.inner.lock().unwrap().revoked
    }

    pub fn flag(&self, id: &str) -> Option<Value> {
        self.inner
            .lock()
            .unwrap()
            .queues
            .iter()
            .find(|q| q["id"] == id)
            .and_then(|q| q.get("editableMemberStatus").cloned())
    }

    fn record(&self, method: &'static str, path: String, body: Option<Value>) {
        self.inner
            .lock()
            .unwrap()
            .requests
            .push(Recorded { method, path, body });
    }

    /// Bind to an ephemeral port and serve in the background; returns the base URL
    pub async fn spawn(&self) -> String {
        let app = Router::new()
            .route("/restapi/oauth/token", post(token))
            .route("/restapi/oauth/revoke", post(revoke))
            .route("/restapi/v1.0/account/~/call-queues", get(list_queues))
            .route(
                "/restapi/v1.0/account/~/call-queues/{id}",
                get(get_queue).put(update_queue),
            )
            .with_state(self.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}", addr)
    }
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "errorCode": "AGW-401",
            "message": "Authorization header is not specified"
        })),
    )
        .into_response()
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.eq_ignore_ascii_case(&format!("bearer {}", ACCESS_TOKEN)))
        .unwrap_or(false)
}

fn has_basic_auth(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("Basic "))
        .unwrap_or(false)
}

async fn token(
    State(platform): State<FakePlatform>,
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    platform.record("POST", "/restapi/oauth/token".to_string(), None);
    platform.inner.lock().unwrap().login_forms.push(form.clone());

    if !has_basic_auth(&headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "invalid_client", "error_description": "Client authentication is required"})),
        )
            .into_response();
    }

    let valid = form.get("grant_type").map(String::as_str) == Some("password")
        && form.get("username").map(String::as_str) == Some(USERNAME)
        && form.get("password").map(String::as_str) == Some(PASSWORD);

    if !valid {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "invalid_grant",
                "error_description": "Invalid resource owner credentials"
            })),
        )
            .into_response();
    }

    Json(json!({
        "access_token": ACCESS_TOKEN,
        "token_type": "bearer",
        "expires_in": 3600,
        "refresh_token": "fake-refresh-token",
        "refresh_token_expires_in": 604800,
        "scope": "ReadAccounts EditExtensions",
        "owner_id": "1001"
    }))
    .into_response()
}

async fn revoke(State(platform): State<FakePlatform>, headers: HeaderMap) -> Response {
    platform.record("POST", "/restapi/oauth/revoke".to_string(), None);
    if !has_basic_auth(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    platform.inner.lock().unwrap().revoked = true;
    StatusCode::OK.into_response()
}

async fn list_queues(State(platform): State<FakePlatform>, headers: HeaderMap) -> Response {
    platform.record("GET", "/restapi/v1.0/account/~/call-queues".to_string(), None);
    if !authorized(&headers) {
        return unauthorized();
    }

    let inner = platform.inner.lock().unwrap();
    if inner.listing_without_records {
        return Json(json!({"uri": "/restapi/v1.0/account/~/call-queues"})).into_response();
    }

    let records: Vec<Value> = inner
        .queues
        .iter()
        .map(|q| json!({"id": q["id"], "name": q["name"], "extensionNumber": q["extensionNumber"]}))
        .collect();
    Json(json!({
        "uri": "/restapi/v1.0/account/~/call-queues",
        "records": records,
        "paging": {"page": 1, "perPage": 100},
    }))
    .into_response()
}

async fn get_queue(
    State(platform): State<FakePlatform>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    platform.record("GET", format!("/restapi/v1.0/account/~/call-queues/{}", id), None);
    if !authorized(&headers) {
        return unauthorized();
    }

    let inner = platform.inner.lock().unwrap();
    if inner.failing_gets.contains(&id) {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({"errorCode": "CMN-211", "message": "Service temporarily unavailable"})),
        )
            .into_response();
    }
    if inner.garbled_gets.contains(&id) {
        return (
            [(header::CONTENT_TYPE, "application/json")],
            "{\"id\": \"truncated",
        )
            .into_response();
    }

    match inner.queues.iter().find(|q| q["id"] == id.as_str()) {
        Some(queue) => Json(queue.clone()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"errorCode": "CMN-102", "message": "Resource for parameter [callQueueId] is not found"})),
        )
            .into_response(),
    }
}

async fn update_queue(
    State(platform): State<FakePlatform>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    platform.record(
        "PUT",
        format!("/restapi/v1.0/account/~/call-queues/{}", id),
        Some(body.clone()),
    );
    if !authorized(&headers) {
        return unauthorized();
    }

    let mut inner = platform.inner.lock().unwrap();
    match inner.queues.iter_mut().find(|q| q["id"] == id.as_str()) {
        Some(queue) => {
            if let Some(flag) = body.get("editableMemberStatus") {
                queue["editableMemberStatus"] = flag.clone();
            }
            Json(queue.clone()).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

pub fn platform_config(base_url: &str) -> PlatformConfig {
    PlatformConfig::new(base_url, CLIENT_ID, CLIENT_SECRET)
}

pub fn authenticator(base_url: &str) -> PlatformAuthenticator {
    PlatformAuthenticator::new(&platform_config(base_url), Arc::new(SystemTimeProvider)).unwrap()
}

pub fn client(base_url: &str) -> PlatformClient {
    PlatformClient::new(&platform_config(base_url), Arc::new(SystemTimeProvider)).unwrap()
}

pub fn credentials() -> Credentials {
    Credentials {
        username: USERNAME.to_string(),
        password: PASSWORD.to_string(),
        extension: Some("101".to_string()),
    }
}
