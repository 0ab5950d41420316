//! Persistence adapter: one trait, two interchangeable backends.
//!
//! `PgStorage` talks to PostgreSQL; `MemStorage` keeps everything in process
//! memory for local development. Both must be observably identical - same
//! ordering, same partial-update semantics, same slug conflict behavior -
//! which is what the shared tests in `memory.rs` and the integration suite
//! exercise.

pub mod memory;
pub mod postgres;

pub use memory::MemStorage;
pub use postgres::PgStorage;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{AboutSection, Contact, Project, ProjectType, ServiceKind};

/// Errors surfaced by either storage backend
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Invalid database URL")]
    InvalidDatabaseUrl,

    #[error("Duplicate slug: {0}")]
    DuplicateSlug(String),

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// A validated project ready to be persisted. Identity and timestamps are
/// assigned by the backend.
#[derive(Debug, Clone)]
pub struct ProjectDraft {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub project_type: ProjectType,
    pub image_url: Option<String>,
    pub embed_url: Option<String>,
    pub benefits: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub is_active: bool,
    pub featured: bool,
}

/// Field-level changes for a partial project update. `None` leaves the stored
/// value untouched; `Some(None)` clears a nullable column.
#[derive(Debug, Clone, Default)]
pub struct ProjectChanges {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub project_type: Option<ProjectType>,
    pub image_url: Option<Option<String>>,
    pub embed_url: Option<Option<String>>,
    pub benefits: Option<Option<String>>,
    pub technologies: Option<Option<Vec<String>>>,
    pub is_active: Option<bool>,
    pub featured: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub service: ServiceKind,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct AboutDraft {
    pub title: String,
    pub description: Option<String>,
    pub paragraphs: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default)]
pub struct AboutChanges {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub paragraphs: Option<Option<Vec<String>>>,
}

/// Contract both backends implement. Listings are ordered by `created_at`
/// descending with a stable tie-break within a process run.
#[async_trait]
pub trait Storage: Send + Sync {
    // Project operations
    async fn insert_project(&self, draft: ProjectDraft) -> Result<Project, StorageError>;
    async fn list_projects(&self) -> Result<Vec<Project>, StorageError>;
    async fn list_active_projects(&self) -> Result<Vec<Project>, StorageError>;
    async fn list_featured_projects(&self) -> Result<Vec<Project>, StorageError>;
    async fn list_projects_by_type(
        &self,
        project_type: ProjectType,
    ) -> Result<Vec<Project>, StorageError>;
    async fn get_project(&self, id: Uuid) -> Result<Option<Project>, StorageError>;
    async fn update_project(
        &self,
        id: Uuid,
        changes: ProjectChanges,
    ) -> Result<Option<Project>, StorageError>;
    async fn delete_project(&self, id: Uuid) -> Result<bool, StorageError>;

    // Contact operations
    async fn insert_contact(&self, draft: ContactDraft) -> Result<Contact, StorageError>;
    async fn list_contacts(&self) -> Result<Vec<Contact>, StorageError>;

    // About operations
    async fn insert_about(&self, draft: AboutDraft) -> Result<AboutSection, StorageError>;
    async fn list_about(&self) -> Result<Vec<AboutSection>, StorageError>;
    async fn update_about(
        &self,
        id: Uuid,
        changes: AboutChanges,
    ) -> Result<Option<AboutSection>, StorageError>;
}
