//! In-memory mock backend for local development without a provisioned
//! database. State does not survive a restart.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::atomic::{AtomicI32, Ordering};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{
    AboutChanges, AboutDraft, ContactDraft, ProjectChanges, ProjectDraft, Storage, StorageError,
};
use crate::models::{AboutSection, Contact, Project, ProjectType};

pub struct MemStorage {
    projects: RwLock<Vec<Project>>,
    contacts: RwLock<Vec<Contact>>,
    about: RwLock<Vec<AboutSection>>,
    next_contact_id: AtomicI32,
}

impl MemStorage {
    pub fn new() -> Self {
        Self {
            projects: RwLock::new(Vec::new()),
            contacts: RwLock::new(Vec::new()),
            about: RwLock::new(Vec::new()),
            next_contact_id: AtomicI32::new(1),
        }
    }

    /// Development seed so the public site has something to render before an
    /// administrator creates real entries.
    pub fn with_sample_data() -> Self {
        let now = Utc::now();

        let samples = [
            (
                "Sales KPI Dashboard",
                "sales-kpi-dashboard",
                "Executive revenue and pipeline tracking across regions.",
                ProjectType::Dashboard,
                Some(vec!["Power BI".to_string(), "DAX".to_string()]),
                true,
            ),
            (
                "Invoice Intake Automation",
                "invoice-intake-automation",
                "Hands-off invoice capture from inbox to ERP.",
                ProjectType::Automation,
                Some(vec!["n8n".to_string(), "PostgreSQL".to_string()]),
                false,
            ),
            (
                "Support Triage Agent",
                "support-triage-agent",
                "AI agent that classifies and routes inbound support email.",
                ProjectType::AiAgent,
                Some(vec!["OpenAI".to_string(), "LangChain".to_string()]),
                false,
            ),
        ];

        let projects: Vec<Project> = samples
            .into_iter()
            .enumerate()
            .map(|(i, (title, slug, description, ty, technologies, featured))| {
                // Staggered timestamps keep the seeded ordering deterministic
                let created = now - Duration::minutes(i as i64);
                Project {
                    id: Uuid::new_v4(),
                    title: title.to_string(),
                    slug: slug.to_string(),
                    description: description.to_string(),
                    project_type: ty,
                    image_url: None,
                    embed_url: None,
                    benefits: None,
                    technologies,
                    is_active: true,
                    featured,
                    created_at: created,
                    updated_at: created,
                }
            })
            .collect();

        Self {
            projects: RwLock::new(projects),
            contacts: RwLock::new(Vec::new()),
            about: RwLock::new(Vec::new()),
            next_contact_id: AtomicI32::new(1),
        }
    }

    fn sorted_projects<F>(&self, items: &[Project], keep: F) -> Vec<Project>
    where
        F: Fn(&Project) -> bool,
    {
        let mut selected: Vec<Project> = items.iter().filter(|p| keep(p)).cloned().collect();
        // Stable sort: records sharing a timestamp keep insertion order
        selected.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        selected
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemStorage {
    async fn insert_project(&self, draft: ProjectDraft) -> Result<Project, StorageError> {
        let mut projects = self.projects.write().await;
        if projects.iter().any(|p| p.slug == draft.slug) {
            return Err(StorageError::DuplicateSlug(draft.slug));
        }

        let now = Utc::now();
        let project = Project {
            id: Uuid::new_v4(),
            title: draft.title,
            slug: draft.slug,
            description: draft.description,
            project_type: draft.project_type,
            image_url: draft.image_url,
            embed_url: draft.embed_url,
            benefits: draft.benefits,
            technologies: draft.technologies,
            is_active: draft.is_active,
            featured: draft.featured,
            created_at: now,
            updated_at: now,
        };
        projects.push(project.clone());
        Ok(project)
    }

    async fn list_projects(&self) -> Result<Vec<Project>, StorageError> {
        let projects = self.projects.read().await;
        Ok(self.sorted_projects(&projects, |_| true))
    }

    async fn list_active_projects(&self) -> Result<Vec<Project>, StorageError> {
        let projects = self.projects.read().await;
        Ok(self.sorted_projects(&projects, |p| p.is_active))
    }

    async fn list_featured_projects(&self) -> Result<Vec<Project>, StorageError> {
        let projects = self.projects.read().await;
        Ok(self.sorted_projects(&projects, |p| p.featured))
    }

    async fn list_projects_by_type(
        &self,
        project_type: ProjectType,
    ) -> Result<Vec<Project>, StorageError> {
        let projects = self.projects.read().await;
        Ok(self.sorted_projects(&projects, |p| p.project_type == project_type))
    }

    async fn get_project(&self, id: Uuid) -> Result<Option<Project>, StorageError> {
        let projects = self.projects.read().await;
        Ok(projects.iter().find(|p| p.id == id).cloned())
    }

    async fn update_project(
        &self,
        id: Uuid,
        changes: ProjectChanges,
    ) -> Result<Option<Project>, StorageError> {
        let mut projects = self.projects.write().await;

        if let Some(new_slug) = &changes.slug {
            if projects.iter().any(|p| p.slug == *new_slug && p.id != id) {
                return Err(StorageError::DuplicateSlug(new_slug.clone()));
            }
        }

        let Some(project) = projects.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        if let Some(title) = changes.title {
            project.title = title;
        }
        if let Some(slug) = changes.slug {
            project.slug = slug;
        }
        if let Some(description) = changes.description {
            project.description = description;
        }
        if let Some(project_type) = changes.project_type {
            project.project_type = project_type;
        }
        if let Some(image_url) = changes.image_url {
            project.image_url = image_url;
        }
        if let Some(embed_url) = changes.embed_url {
            project.embed_url = embed_url;
        }
        if let Some(benefits) = changes.benefits {
            project.benefits = benefits;
        }
        if let Some(technologies) = changes.technologies {
            project.technologies = technologies;
        }
        if let Some(is_active) = changes.is_active {
            project.is_active = is_active;
        }
        if let Some(featured) = changes.featured {
            project.featured = featured;
        }
        project.updated_at = Utc::now();

        Ok(Some(project.clone()))
    }

    async fn delete_project(&self, id: Uuid) -> Result<bool, StorageError> {
        let mut projects = self.projects.write().await;
        let before = projects.len();
        projects.retain(|p| p.id != id);
        Ok(projects.len() < before)
    }

    async fn insert_contact(&self, draft: ContactDraft) -> Result<Contact, StorageError> {
        let contact = Contact {
            id: self.next_contact_id.fetch_add(1, Ordering::Relaxed),
            name: draft.name,
            email: draft.email,
            company: draft.company,
            service: draft.service,
            message: draft.message,
            created_at: Utc::now(),
        };
        self.contacts.write().await.push(contact.clone());
        Ok(contact)
    }

    async fn list_contacts(&self) -> Result<Vec<Contact>, StorageError> {
        let contacts = self.contacts.read().await;
        let mut all: Vec<Contact> = contacts.iter().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn insert_about(&self, draft: AboutDraft) -> Result<AboutSection, StorageError> {
        let now = Utc::now();
        let section = AboutSection {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            paragraphs: draft.paragraphs,
            created_at: now,
            updated_at: now,
        };
        self.about.write().await.push(section.clone());
        Ok(section)
    }

    async fn list_about(&self) -> Result<Vec<AboutSection>, StorageError> {
        let about = self.about.read().await;
        let mut all: Vec<AboutSection> = about.iter().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn update_about(
        &self,
        id: Uuid,
        changes: AboutChanges,
    ) -> Result<Option<AboutSection>, StorageError> {
        let mut about = self.about.write().await;
        let Some(section) = about.iter_mut().find(|s| s.id == id) else {
            return Ok(None);
        };

        if let Some(title) = changes.title {
            section.title = title;
        }
        if let Some(description) = changes.description {
            section.description = description;
        }
        if let Some(paragraphs) = changes.paragraphs {
            section.paragraphs = paragraphs;
        }
        section.updated_at = Utc::now();

        Ok(Some(section.clone()))
    }
}
