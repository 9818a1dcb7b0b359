#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request},
    response::Response,
    Router,
};
use indexmap::IndexMap;
use serde_json::Value;
use tower::ServiceExt;

use school_activities::database::ActivityRegistry;
use school_activities::models::Activity;
use school_activities::web::{self, SharedRegistry};

pub struct TestApp {
    pub router: Router,
    pub registry: SharedRegistry,
}

impl TestApp {
    /// Fresh seeded registry per test.
    pub fn seeded() -> Self {
        Self::with_registry(ActivityRegistry::seeded())
    }

    pub fn empty() -> Self {
        Self::with_registry(ActivityRegistry::new(IndexMap::new()))
    }

    fn with_registry(registry: ActivityRegistry) -> Self {
        let registry = Arc::new(registry);
        let router = web::build_router(Arc::clone(&registry), static_dir());
        Self { router, registry }
    }

    pub async fn send(&self, method: Method, uri: &str) -> Response {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.send(Method::GET, uri).await
    }

    pub async fn post(&self, uri: &str) -> Response {
        self.send(Method::POST, uri).await
    }

    pub async fn delete(&self, uri: &str) -> Response {
        self.send(Method::DELETE, uri).await
    }

    pub async fn activities(&self) -> Value {
        body_json(self.get("/activities").await).await
    }

    pub fn activity(&self, name: &str) -> Activity {
        self.registry.get(name).unwrap()
    }
}

pub fn static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")
}

pub async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn content_type(response: &Response) -> String {
    response
        .headers()
        .get(axum::http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
