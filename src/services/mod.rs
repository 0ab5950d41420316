//! Use-case layer: validation and invariants over the storage contract.

pub mod about;
pub mod catalog;
pub mod contact;

pub use about::AboutService;
pub use catalog::CatalogService;
pub use contact::ContactService;

use std::collections::HashMap;
use thiserror::Error;

use crate::storage::StorageError;

/// Errors shared by the service layer
#[derive(Debug, Error)]
pub enum ServiceError {
    /// One entry per violated field, all collected in a single pass
    #[error("Validation failed")]
    Validation(HashMap<String, String>),

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
