//! Catalog service: every read and write against the project collection goes
//! through here so schema validation and slug rules hold for both backends.

use std::collections::HashMap;
use std::sync::Arc;
use url::Url;
use uuid::Uuid;

use super::ServiceError;
use crate::models::{CreateProject, Project, ProjectType, UpdateProject};
use crate::storage::{ProjectChanges, ProjectDraft, Storage};

#[derive(Clone)]
pub struct CatalogService {
    storage: Arc<dyn Storage>,
}

impl CatalogService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub async fn create(&self, input: CreateProject) -> Result<Project, ServiceError> {
        let draft = validate_create(input)?;
        Ok(self.storage.insert_project(draft).await?)
    }

    /// Full catalog, inactive entries included. Admin view.
    pub async fn list(&self) -> Result<Vec<Project>, ServiceError> {
        Ok(self.storage.list_projects().await?)
    }

    /// Feed consumed by the public portfolio page.
    pub async fn list_active(&self) -> Result<Vec<Project>, ServiceError> {
        Ok(self.storage.list_active_projects().await?)
    }

    pub async fn list_featured(&self) -> Result<Vec<Project>, ServiceError> {
        Ok(self.storage.list_featured_projects().await?)
    }

    pub async fn list_by_type(
        &self,
        project_type: ProjectType,
    ) -> Result<Vec<Project>, ServiceError> {
        Ok(self.storage.list_projects_by_type(project_type).await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<Project, ServiceError> {
        self.storage
            .get_project(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Project not found: {}", id)))
    }

    pub async fn update(&self, id: Uuid, input: UpdateProject) -> Result<Project, ServiceError> {
        let changes = validate_update(input)?;
        self.storage
            .update_project(id, changes)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Project not found: {}", id)))
    }

    /// Returns whether a record was actually removed; the HTTP layer maps
    /// `false` to 404.
    pub async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        Ok(self.storage.delete_project(id).await?)
    }
}

/// Derive a URL slug from a title: lowercase, non-alphanumeric runs collapsed
/// to `-`, leading/trailing `-` stripped.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_dash = false;

    for c in lowered.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(c);
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }

    slug
}

fn validate_create(input: CreateProject) -> Result<ProjectDraft, ServiceError> {
    let mut errors = HashMap::new();

    let title = require_text(input.title, "title", "Title is required", &mut errors);
    let description = require_text(
        input.description,
        "description",
        "Description is required",
        &mut errors,
    );

    let project_type = match input
        .project_type
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        Some(s) => match s.parse::<ProjectType>() {
            Ok(ty) => ty,
            Err(msg) => {
                errors.insert("type".to_string(), msg);
                ProjectType::Dashboard
            }
        },
        None => {
            errors.insert("type".to_string(), "Type is required".to_string());
            ProjectType::Dashboard
        }
    };

    let image_url = optional_url(input.image_url, "imageUrl", &mut errors);
    let embed_url = optional_url(input.embed_url, "embedUrl", &mut errors);

    if !errors.is_empty() {
        return Err(ServiceError::Validation(errors));
    }

    let slug = match input
        .slug
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
    {
        Some(slug) => slug,
        None => slugify(&title),
    };

    Ok(ProjectDraft {
        title,
        slug,
        description,
        project_type,
        image_url,
        embed_url,
        benefits: input.benefits,
        technologies: input.technologies,
        is_active: input.is_active.unwrap_or(true),
        featured: input.featured.unwrap_or(false),
    })
}

fn validate_update(input: UpdateProject) -> Result<ProjectChanges, ServiceError> {
    let mut errors = HashMap::new();
    let mut changes = ProjectChanges::default();

    if let Some(title) = input.title {
        let title = title.trim().to_string();
        if title.is_empty() {
            errors.insert("title".to_string(), "Title cannot be empty".to_string());
        } else {
            changes.title = Some(title);
        }
    }

    if let Some(slug) = input.slug {
        let slug = slug.trim().to_string();
        if slug.is_empty() {
            errors.insert("slug".to_string(), "Slug cannot be empty".to_string());
        } else {
            changes.slug = Some(slug);
        }
    }

    if let Some(description) = input.description {
        let description = description.trim().to_string();
        if description.is_empty() {
            errors.insert(
                "description".to_string(),
                "Description cannot be empty".to_string(),
            );
        } else {
            changes.description = Some(description);
        }
    }

    if let Some(type_str) = input.project_type {
        match type_str.trim().parse::<ProjectType>() {
            Ok(ty) => changes.project_type = Some(ty),
            Err(msg) => {
                errors.insert("type".to_string(), msg);
            }
        }
    }

    // A JSON null (or empty string) clears the column; anything else must
    // parse as a URL
    if let Some(value) = input.image_url {
        changes.image_url = Some(optional_url(value, "imageUrl", &mut errors));
    }
    if let Some(value) = input.embed_url {
        changes.embed_url = Some(optional_url(value, "embedUrl", &mut errors));
    }

    changes.benefits = input.benefits;
    changes.technologies = input.technologies;
    changes.is_active = input.is_active;
    changes.featured = input.featured;

    if !errors.is_empty() {
        return Err(ServiceError::Validation(errors));
    }

    Ok(changes)
}

fn require_text(
    value: Option<String>,
    field: &str,
    message: &str,
    errors: &mut HashMap<String, String>,
) -> String {
    match value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
    {
        Some(v) => v,
        None => {
            errors.insert(field.to_string(), message.to_string());
            String::new()
        }
    }
}

fn optional_url(
    value: Option<String>,
    field: &str,
    errors: &mut HashMap<String, String>,
) -> Option<String> {
    match value.filter(|v| !v.trim().is_empty()) {
        Some(v) => {
            if Url::parse(&v).is_ok() {
                Some(v)
            } else {
                errors.insert(field.to_string(), "Must be a valid URL".to_string());
                None
            }
        }
        None => None,
    }
}
