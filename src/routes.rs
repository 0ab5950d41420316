use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{about, auth, contacts, projects};
use crate::state::AppState;

/// Build the full HTTP surface. Admin-only handlers gate themselves with the
/// `AdminSession` extractor, so public and protected methods can share paths.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        // Session management
        .route("/api/login", post(auth::login))
        .route("/api/logout", post(auth::logout))
        // Lead capture
        .route("/api/contact", post(contacts::submit))
        .route("/api/contacts", get(contacts::list))
        // Project catalog
        .route("/api/projects", get(projects::list).post(projects::create))
        .route("/api/projects/active", get(projects::list_active))
        .route("/api/projects/featured", get(projects::list_featured))
        .route("/api/projects/type/:type", get(projects::list_by_type))
        .route(
            "/api/projects/:id",
            get(projects::get_by_id)
                .put(projects::update)
                .delete(projects::remove),
        )
        // About content
        .route("/api/about", get(about::list).post(about::create))
        .route("/api/about/:id", put(about::update))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!({
        "service": "insight-site-api",
        "status": "ok"
    }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
