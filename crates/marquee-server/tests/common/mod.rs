//! Shared helpers for driving the router in-process

#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{
        Request, StatusCode,
        header::{CONTENT_LENGTH, CONTENT_TYPE},
    },
};
use marquee_server::{
    AppState,
    config::{ServerConfig, StorageBackend},
    create_router,
};
use marquee_store::{BlobStorage, MemoryStorage};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub const BOUNDARY: &str = "marquee-test-boundary";

pub struct TestApp {
    pub router: Router,
    pub storage: Arc<MemoryStorage>,
}

pub fn test_config() -> ServerConfig {
    ServerConfig {
        storage_backend: StorageBackend::Memory,
        media_public_base_url: "/media".to_string(),
        ..ServerConfig::default()
    }
}

pub fn app() -> TestApp {
    app_with(test_config())
}

pub fn app_with(config: ServerConfig) -> TestApp {
    let storage = Arc::new(MemoryStorage::new());
    let state = AppState::new(storage.clone() as Arc<dyn BlobStorage>, config);
    TestApp {
        router: create_router(state),
        storage,
    }
}

/// Send a request and return the status with the decoded JSON body, if any
pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

/// POST a raw body with an arbitrary content type
pub fn post_raw(uri: &str, content_type: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, content_type)
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Multipart upload with a single `file` field
pub fn upload(file_name: &str, content_type: &str, data: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\n",
            file_name
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", content_type).as_bytes());
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

    Request::builder()
        .method("POST")
        .uri("/api/media")
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .header(CONTENT_LENGTH, body.len())
        .body(Body::from(body))
        .unwrap()
}
