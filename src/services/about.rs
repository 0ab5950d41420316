//! Editable "about" content blocks rendered on the public site.

use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use super::ServiceError;
use crate::models::{AboutSection, CreateAbout, UpdateAbout};
use crate::storage::{AboutChanges, AboutDraft, Storage};

#[derive(Clone)]
pub struct AboutService {
    storage: Arc<dyn Storage>,
}

impl AboutService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub async fn list(&self) -> Result<Vec<AboutSection>, ServiceError> {
        Ok(self.storage.list_about().await?)
    }

    pub async fn create(&self, input: CreateAbout) -> Result<AboutSection, ServiceError> {
        let title = match input
            .title
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
        {
            Some(v) => v,
            None => {
                let mut errors = HashMap::new();
                errors.insert("title".to_string(), "Title is required".to_string());
                return Err(ServiceError::Validation(errors));
            }
        };

        let draft = AboutDraft {
            title,
            description: input.description.filter(|d| !d.trim().is_empty()),
            paragraphs: input.paragraphs,
        };
        Ok(self.storage.insert_about(draft).await?)
    }

    pub async fn update(&self, id: Uuid, input: UpdateAbout) -> Result<AboutSection, ServiceError> {
        let mut changes = AboutChanges::default();

        if let Some(title) = input.title {
            let title = title.trim().to_string();
            if title.is_empty() {
                let mut errors = HashMap::new();
                errors.insert("title".to_string(), "Title cannot be empty".to_string());
                return Err(ServiceError::Validation(errors));
            }
            changes.title = Some(title);
        }
        changes.description = input.description;
        changes.paragraphs = input.paragraphs;

        self.storage
            .update_about(id, changes)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("About section not found: {}", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemStorage;

    fn service() -> AboutService {
        AboutService::new(Arc::new(MemStorage::new()))
    }

    #[tokio::test]
    async fn partial_update_keeps_unsupplied_paragraphs() {
        let about = service();
        let section = about
            .create(CreateAbout {
                title: Some("Who we are".to_string()),
                description: Some("A data consultancy".to_string()),
                paragraphs: Some(vec!["First".to_string(), "Second".to_string()]),
            })
            .await
            .unwrap();

        let updated = about
            .update(
                section.id,
                UpdateAbout {
                    title: Some("About us".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "About us");
        assert_eq!(updated.paragraphs, section.paragraphs);
        assert_eq!(updated.description, section.description);
    }

    #[tokio::test]
    async fn missing_title_is_rejected() {
        let about = service();
        let err = about.create(CreateAbout::default()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }
}
