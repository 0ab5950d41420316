//! Lead capture from the public contact form.

use std::collections::HashMap;
use std::sync::Arc;

use super::ServiceError;
use crate::models::{Contact, CreateContact, ServiceKind};
use crate::storage::{ContactDraft, Storage};

#[derive(Clone)]
pub struct ContactService {
    storage: Arc<dyn Storage>,
}

impl ContactService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub async fn submit(&self, input: CreateContact) -> Result<Contact, ServiceError> {
        let draft = validate_contact(input)?;
        Ok(self.storage.insert_contact(draft).await?)
    }

    /// Admin-only export of captured leads, newest first.
    pub async fn list(&self) -> Result<Vec<Contact>, ServiceError> {
        Ok(self.storage.list_contacts().await?)
    }
}

fn validate_contact(input: CreateContact) -> Result<ContactDraft, ServiceError> {
    let mut errors = HashMap::new();

    let name = match input
        .name
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
    {
        Some(v) => v,
        None => {
            errors.insert("name".to_string(), "Name is required".to_string());
            String::new()
        }
    };

    let email = match input
        .email
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
    {
        Some(v) if v.contains('@') => v,
        Some(_) => {
            errors.insert(
                "email".to_string(),
                "Must be a valid email address".to_string(),
            );
            String::new()
        }
        None => {
            errors.insert("email".to_string(), "Email is required".to_string());
            String::new()
        }
    };

    let message = match input
        .message
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
    {
        Some(v) => v,
        None => {
            errors.insert("message".to_string(), "Message is required".to_string());
            String::new()
        }
    };

    let service = match input
        .service
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        Some(s) => match s.parse::<ServiceKind>() {
            Ok(kind) => kind,
            Err(msg) => {
                errors.insert("service".to_string(), msg);
                ServiceKind::Other
            }
        },
        None => {
            errors.insert("service".to_string(), "Service is required".to_string());
            ServiceKind::Other
        }
    };

    if !errors.is_empty() {
        return Err(ServiceError::Validation(errors));
    }

    Ok(ContactDraft {
        name,
        email,
        company: input.company.filter(|c| !c.trim().is_empty()),
        service,
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemStorage;

    fn service() -> ContactService {
        ContactService::new(Arc::new(MemStorage::new()))
    }

    #[tokio::test]
    async fn valid_submission_is_stored() {
        let contacts = service();
        let input = CreateContact {
            name: Some("Ana Souza".to_string()),
            email: Some("ana@empresa.com".to_string()),
            company: Some("Empresa".to_string()),
            service: Some("dashboards".to_string()),
            message: Some("We need a revenue dashboard.".to_string()),
        };

        let contact = contacts.submit(input).await.unwrap();
        assert_eq!(contact.service, ServiceKind::Dashboards);
        assert_eq!(contacts.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn invalid_submission_names_each_field() {
        let contacts = service();
        let input = CreateContact {
            name: None,
            email: Some("not-an-email".to_string()),
            company: None,
            service: Some("catering".to_string()),
            message: None,
        };

        let err = contacts.submit(input).await.unwrap_err();
        let ServiceError::Validation(errors) = err else {
            panic!("expected validation error, got {:?}", err);
        };
        assert!(errors.contains_key("name"));
        assert!(errors.contains_key("email"));
        assert!(errors.contains_key("service"));
        assert!(errors.contains_key("message"));
        assert!(contacts.list().await.unwrap().is_empty());
    }
}
