//! "About" content blocks for the public site.

use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::AdminSession;
use crate::models::{AboutSection, CreateAbout, UpdateAbout};
use crate::state::AppState;

/// GET /api/about
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<AboutSection>>, ApiError> {
    Ok(Json(state.about.list().await?))
}

/// POST /api/about
pub async fn create(
    _session: AdminSession,
    State(state): State<AppState>,
    Json(payload): Json<CreateAbout>,
) -> Result<Json<Value>, ApiError> {
    let section = state.about.create(payload).await?;
    Ok(Json(json!({ "success": true, "about": section })))
}

/// PUT /api/about/:id
pub async fn update(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateAbout>,
) -> Result<Json<Value>, ApiError> {
    let id =
        Uuid::parse_str(&id).map_err(|_| ApiError::bad_request("Invalid about section id"))?;
    let section = state.about.update(id, payload).await?;
    Ok(Json(json!({ "success": true, "about": section })))
}
