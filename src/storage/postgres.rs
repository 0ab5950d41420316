//! Durable backend over PostgreSQL.
//!
//! Queries are bound at runtime so the crate builds without a provisioned
//! database; every operation is a single statement and relies on the store's
//! own transactional guarantees.

use async_trait::async_trait;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::types::Json;
use sqlx::{PgPool, Row};
use tracing::info;
use uuid::Uuid;

use super::{
    AboutChanges, AboutDraft, ContactDraft, ProjectChanges, ProjectDraft, Storage, StorageError,
};
use crate::models::{AboutSection, Contact, Project, ProjectType, ServiceKind};

const PROJECT_COLUMNS: &str = "id, title, slug, description, type, image_url, embed_url, \
     benefits, technologies, is_active, featured, created_at, updated_at";

const CONTACT_COLUMNS: &str = "id, name, email, company, service, message, created_at";

const ABOUT_COLUMNS: &str = "id, title, description, paragraphs, created_at, updated_at";

const SCHEMA_STATEMENTS: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS projects (
        id UUID PRIMARY KEY,
        title TEXT NOT NULL,
        slug TEXT NOT NULL UNIQUE,
        description TEXT NOT NULL,
        type TEXT NOT NULL,
        image_url TEXT,
        embed_url TEXT,
        benefits TEXT,
        technologies TEXT[],
        is_active BOOLEAN NOT NULL DEFAULT TRUE,
        featured BOOLEAN NOT NULL DEFAULT FALSE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )",
    "CREATE INDEX IF NOT EXISTS idx_projects_created_at ON projects (created_at DESC)",
    "CREATE TABLE IF NOT EXISTS contacts (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        company TEXT,
        service TEXT NOT NULL,
        message TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )",
    "CREATE TABLE IF NOT EXISTS about_sections (
        id UUID PRIMARY KEY,
        title TEXT NOT NULL,
        description TEXT,
        paragraphs JSONB,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )",
];

pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    /// Connect, bootstrap the schema, and return the ready adapter.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StorageError> {
        url::Url::parse(database_url).map_err(|_| StorageError::InvalidDatabaseUrl)?;

        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        for statement in SCHEMA_STATEMENTS {
            sqlx::query(statement)
                .execute(&pool)
                .await
                .map_err(|e| StorageError::Schema(e.to_string()))?;
        }

        info!("Connected to PostgreSQL storage");
        Ok(Self { pool })
    }

    async fn fetch_projects(&self, query: &str) -> Result<Vec<Project>, StorageError> {
        let rows = sqlx::query(query).fetch_all(&self.pool).await?;
        rows.iter().map(project_from_row).collect()
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23505"))
}

fn project_from_row(row: &PgRow) -> Result<Project, StorageError> {
    let type_str: String = row.try_get("type")?;
    let project_type = type_str
        .parse::<ProjectType>()
        .map_err(|_| StorageError::QueryError(format!("unexpected project type: {}", type_str)))?;

    Ok(Project {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        slug: row.try_get("slug")?,
        description: row.try_get("description")?,
        project_type,
        image_url: row.try_get("image_url")?,
        embed_url: row.try_get("embed_url")?,
        benefits: row.try_get("benefits")?,
        technologies: row.try_get("technologies")?,
        is_active: row.try_get("is_active")?,
        featured: row.try_get("featured")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

fn contact_from_row(row: &PgRow) -> Result<Contact, StorageError> {
    let service_str: String = row.try_get("service")?;
    let service = service_str
        .parse::<ServiceKind>()
        .map_err(|_| StorageError::QueryError(format!("unexpected service: {}", service_str)))?;

    Ok(Contact {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        company: row.try_get("company")?,
        service,
        message: row.try_get("message")?,
        created_at: row.try_get("created_at")?,
    })
}

fn about_from_row(row: &PgRow) -> Result<AboutSection, StorageError> {
    let paragraphs: Option<Json<Vec<String>>> = row.try_get("paragraphs")?;

    Ok(AboutSection {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        paragraphs: paragraphs.map(|p| p.0),
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[async_trait]
impl Storage for PgStorage {
    async fn insert_project(&self, draft: ProjectDraft) -> Result<Project, StorageError> {
        let query = format!(
            "INSERT INTO projects \
                 (id, title, slug, description, type, image_url, embed_url, benefits, \
                  technologies, is_active, featured) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING {PROJECT_COLUMNS}"
        );

        let row = sqlx::query(&query)
            .bind(Uuid::new_v4())
            .bind(&draft.title)
            .bind(&draft.slug)
            .bind(&draft.description)
            .bind(draft.project_type.as_str())
            .bind(&draft.image_url)
            .bind(&draft.embed_url)
            .bind(&draft.benefits)
            .bind(&draft.technologies)
            .bind(draft.is_active)
            .bind(draft.featured)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    StorageError::DuplicateSlug(draft.slug.clone())
                } else {
                    StorageError::Sqlx(e)
                }
            })?;

        project_from_row(&row)
    }

    async fn list_projects(&self) -> Result<Vec<Project>, StorageError> {
        self.fetch_projects(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects ORDER BY created_at DESC, id"
        ))
        .await
    }

    async fn list_active_projects(&self) -> Result<Vec<Project>, StorageError> {
        self.fetch_projects(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE is_active \
             ORDER BY created_at DESC, id"
        ))
        .await
    }

    async fn list_featured_projects(&self) -> Result<Vec<Project>, StorageError> {
        self.fetch_projects(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE featured \
             ORDER BY created_at DESC, id"
        ))
        .await
    }

    async fn list_projects_by_type(
        &self,
        project_type: ProjectType,
    ) -> Result<Vec<Project>, StorageError> {
        let query = format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE type = $1 \
             ORDER BY created_at DESC, id"
        );
        let rows = sqlx::query(&query)
            .bind(project_type.as_str())
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(project_from_row).collect()
    }

    async fn get_project(&self, id: Uuid) -> Result<Option<Project>, StorageError> {
        let query = format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE id = $1");
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(project_from_row).transpose()
    }

    async fn update_project(
        &self,
        id: Uuid,
        changes: ProjectChanges,
    ) -> Result<Option<Project>, StorageError> {
        // Absent fields keep the stored value; boolean flags let an explicit
        // NULL through for nullable columns
        let query = format!(
            "UPDATE projects SET \
                 title = COALESCE($2, title), \
                 slug = COALESCE($3, slug), \
                 description = COALESCE($4, description), \
                 type = COALESCE($5, type), \
                 image_url = CASE WHEN $6 THEN $7 ELSE image_url END, \
                 embed_url = CASE WHEN $8 THEN $9 ELSE embed_url END, \
                 benefits = CASE WHEN $10 THEN $11 ELSE benefits END, \
                 technologies = CASE WHEN $12 THEN $13 ELSE technologies END, \
                 is_active = COALESCE($14, is_active), \
                 featured = COALESCE($15, featured), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {PROJECT_COLUMNS}"
        );

        let slug_for_error = changes.slug.clone();
        let row = sqlx::query(&query)
            .bind(id)
            .bind(&changes.title)
            .bind(&changes.slug)
            .bind(&changes.description)
            .bind(changes.project_type.map(|t| t.as_str()))
            .bind(changes.image_url.is_some())
            .bind(changes.image_url.clone().flatten())
            .bind(changes.embed_url.is_some())
            .bind(changes.embed_url.clone().flatten())
            .bind(changes.benefits.is_some())
            .bind(changes.benefits.clone().flatten())
            .bind(changes.technologies.is_some())
            .bind(changes.technologies.clone().flatten())
            .bind(changes.is_active)
            .bind(changes.featured)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    StorageError::DuplicateSlug(slug_for_error.unwrap_or_default())
                } else {
                    StorageError::Sqlx(e)
                }
            })?;

        row.as_ref().map(project_from_row).transpose()
    }

    async fn delete_project(&self, id: Uuid) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn insert_contact(&self, draft: ContactDraft) -> Result<Contact, StorageError> {
        let query = format!(
            "INSERT INTO contacts (name, email, company, service, message) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {CONTACT_COLUMNS}"
        );
        let row = sqlx::query(&query)
            .bind(&draft.name)
            .bind(&draft.email)
            .bind(&draft.company)
            .bind(draft.service.as_str())
            .bind(&draft.message)
            .fetch_one(&self.pool)
            .await?;
        contact_from_row(&row)
    }

    async fn list_contacts(&self) -> Result<Vec<Contact>, StorageError> {
        let query = format!(
            "SELECT {CONTACT_COLUMNS} FROM contacts ORDER BY created_at DESC, id DESC"
        );
        let rows = sqlx::query(&query).fetch_all(&self.pool).await?;
        rows.iter().map(contact_from_row).collect()
    }

    async fn insert_about(&self, draft: AboutDraft) -> Result<AboutSection, StorageError> {
        let query = format!(
            "INSERT INTO about_sections (id, title, description, paragraphs) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {ABOUT_COLUMNS}"
        );
        let row = sqlx::query(&query)
            .bind(Uuid::new_v4())
            .bind(&draft.title)
            .bind(&draft.description)
            .bind(draft.paragraphs.clone().map(Json))
            .fetch_one(&self.pool)
            .await?;
        about_from_row(&row)
    }

    async fn list_about(&self) -> Result<Vec<AboutSection>, StorageError> {
        let query = format!(
            "SELECT {ABOUT_COLUMNS} FROM about_sections ORDER BY created_at DESC, id"
        );
        let rows = sqlx::query(&query).fetch_all(&self.pool).await?;
        rows.iter().map(about_from_row).collect()
    }

    async fn update_about(
        &self,
        id: Uuid,
        changes: AboutChanges,
    ) -> Result<Option<AboutSection>, StorageError> {
        let query = format!(
            "UPDATE about_sections SET \
                 title = COALESCE($2, title), \
                 description = CASE WHEN $3 THEN $4 ELSE description END, \
                 paragraphs = CASE WHEN $5 THEN $6 ELSE paragraphs END, \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {ABOUT_COLUMNS}"
        );

        let row = sqlx::query(&query)
            .bind(id)
            .bind(&changes.title)
            .bind(changes.description.is_some())
            .bind(changes.description.clone().flatten())
            .bind(changes.paragraphs.is_some())
            .bind(changes.paragraphs.clone().flatten().map(Json))
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(about_from_row).transpose()
    }
}
