//! Contact form intake and the admin lead export.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::AdminSession;
use crate::models::{Contact, CreateContact};
use crate::state::AppState;

/// POST /api/contact - public lead capture
pub async fn submit(
    State(state): State<AppState>,
    Json(payload): Json<CreateContact>,
) -> Result<Json<Value>, ApiError> {
    let contact = state.contacts.submit(payload).await?;
    Ok(Json(json!({ "success": true, "contact": contact })))
}

/// GET /api/contacts - captured leads, newest first
pub async fn list(
    _session: AdminSession,
    State(state): State<AppState>,
) -> Result<Json<Vec<Contact>>, ApiError> {
    Ok(Json(state.contacts.list().await?))
}
