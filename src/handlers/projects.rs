//! Project catalog endpoints. Reads of active/featured/typed listings are
//! public; everything that can see or change inactive entries requires an
//! admin session.

use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::AdminSession;
use crate::models::{CreateProject, Project, ProjectType, UpdateProject};
use crate::state::AppState;

fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::bad_request("Invalid project id"))
}

/// GET /api/projects - full catalog including inactive entries
pub async fn list(
    _session: AdminSession,
    State(state): State<AppState>,
) -> Result<Json<Vec<Project>>, ApiError> {
    Ok(Json(state.catalog.list().await?))
}

/// GET /api/projects/active - the public portfolio feed
pub async fn list_active(State(state): State<AppState>) -> Result<Json<Vec<Project>>, ApiError> {
    Ok(Json(state.catalog.list_active().await?))
}

/// GET /api/projects/featured
pub async fn list_featured(State(state): State<AppState>) -> Result<Json<Vec<Project>>, ApiError> {
    Ok(Json(state.catalog.list_featured().await?))
}

/// GET /api/projects/type/:type
pub async fn list_by_type(
    State(state): State<AppState>,
    Path(type_str): Path<String>,
) -> Result<Json<Vec<Project>>, ApiError> {
    let project_type: ProjectType = type_str.parse().map_err(ApiError::bad_request)?;
    Ok(Json(state.catalog.list_by_type(project_type).await?))
}

/// GET /api/projects/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Project>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.catalog.get(id).await?))
}

/// POST /api/projects
pub async fn create(
    _session: AdminSession,
    State(state): State<AppState>,
    Json(payload): Json<CreateProject>,
) -> Result<Json<Value>, ApiError> {
    let project = state.catalog.create(payload).await?;
    Ok(Json(json!({ "success": true, "project": project })))
}

/// PUT /api/projects/:id - partial update; omitted fields stay untouched
pub async fn update(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateProject>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&id)?;
    let project = state.catalog.update(id, payload).await?;
    Ok(Json(json!({ "success": true, "project": project })))
}

/// DELETE /api/projects/:id
pub async fn remove(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&id)?;

    if state.catalog.delete(id).await? {
        Ok(Json(json!({ "success": true, "message": "Project deleted" })))
    } else {
        Err(ApiError::not_found("Project not found"))
    }
}
