#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use person_core::lookup::PersonKey;
use person_db::models::person::{CreatePerson, Person, UpdatePerson};
use person_db::{MemoryPersonStore, PersonStore, StoreError};
use tower::ServiceExt;

use person_api::config::ServerConfig;
use person_api::state::AppState;

/// Message every [`FailingStore`] operation fails with.
pub const STORE_FAILURE: &str = "connection to person store lost";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: None,
        database_max_connections: 1,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router over `store`.
///
/// Uses the same `build_app` as `main.rs`, so tests exercise the
/// production middleware stack.
pub fn build_test_app(store: Arc<dyn PersonStore>) -> Router {
    person_api::build_app(AppState::new(store, test_config()))
}

/// App backed by a fresh in-memory store.
pub fn memory_app() -> Router {
    build_test_app(Arc::new(MemoryPersonStore::new()))
}

/// App whose store fails every operation.
pub fn failing_app() -> Router {
    build_test_app(Arc::new(FailingStore))
}

/// A store that is never reachable.
pub struct FailingStore;

#[async_trait]
impl PersonStore for FailingStore {
    async fn insert(&self, _input: CreatePerson) -> Result<Person, StoreError> {
        Err(StoreError::Unavailable(STORE_FAILURE.into()))
    }

    async fn find(&self, _key: &PersonKey) -> Result<Option<Person>, StoreError> {
        Err(StoreError::Unavailable(STORE_FAILURE.into()))
    }

    async fn update(
        &self,
        _key: &PersonKey,
        _input: UpdatePerson,
    ) -> Result<Option<Person>, StoreError> {
        Err(StoreError::Unavailable(STORE_FAILURE.into()))
    }

    async fn delete(&self, _key: &PersonKey) -> Result<Option<Person>, StoreError> {
        Err(StoreError::Unavailable(STORE_FAILURE.into()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable(STORE_FAILURE.into()))
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, method: Method, uri: &str, body: Option<String>) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let request = builder
        .body(body.map(Body::from).unwrap_or_else(Body::empty))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(json.to_string())).await
}

pub async fn patch_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(json.to_string())).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Create a person through the API and return its `_id`.
pub async fn create_person(app: &Router, json: serde_json::Value) -> String {
    let response = post_json(app.clone(), "/api", json).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["_id"]
        .as_str()
        .expect("_id should be a string")
        .to_string()
}
