//! Session endpoints for the admin panel.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config;
use crate::error::ApiError;
use crate::middleware::bearer_token;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// POST /api/login - exchange the fixed admin credentials for a session token
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<Value>, ApiError> {
    let auth = &config::config().auth;

    if payload.username != auth.admin_username || payload.password != auth.admin_password {
        // Never reveal which of username/password was wrong
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let token = state.tokens.issue().await;
    tracing::info!("administrator logged in");

    Ok(Json(json!({
        "success": true,
        "token": token,
        "message": "Login successful"
    })))
}

/// POST /api/logout - revoke the presented token. Idempotent; succeeds even
/// without a token.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Json<Value> {
    if let Some(token) = bearer_token(&headers) {
        state.tokens.revoke(&token).await;
    }

    Json(json!({ "success": true, "message": "Logged out" }))
}
