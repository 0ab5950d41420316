use std::sync::Arc;

use anyhow::Result;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use insight_site_api::routes::router;
use insight_site_api::state::AppState;
use insight_site_api::storage::MemStorage;

/// Fresh app over an empty in-memory backend.
pub fn app() -> Router {
    router(AppState::new(Arc::new(MemStorage::new())))
}

/// App over the seeded development backend.
#[allow(dead_code)]
pub fn app_with_samples() -> Router {
    router(AppState::new(Arc::new(MemStorage::with_sample_data())))
}

/// Drive one request through the router in-process and decode the JSON body.
pub async fn send(
    app: &Router,
    method: &str,
    path: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Result<(StatusCode, Value)> {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))?,
        None => builder.body(Body::empty())?,
    };

    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };

    Ok((status, value))
}

/// Log in with the default admin credentials and return the session token.
#[allow(dead_code)]
pub async fn login(app: &Router) -> Result<String> {
    let (status, body) = send(
        app,
        "POST",
        "/api/login",
        None,
        Some(json!({ "username": "admin", "password": "admin123" })),
    )
    .await?;

    anyhow::ensure!(status == StatusCode::OK, "login failed with {}", status);
    body["token"]
        .as_str()
        .map(|t| t.to_string())
        .ok_or_else(|| anyhow::anyhow!("login response missing token"))
}

/// Create a project through the API and return its JSON representation.
#[allow(dead_code)]
pub async fn create_project(app: &Router, token: &str, payload: Value) -> Result<Value> {
    let (status, body) = send(app, "POST", "/api/projects", Some(token), Some(payload)).await?;
    anyhow::ensure!(
        status == StatusCode::OK,
        "project creation failed with {}: {}",
        status,
        body
    );
    Ok(body["project"].clone())
}
