use std::sync::Arc;

use crate::auth::TokenStore;
use crate::services::{AboutService, CatalogService, ContactService};
use crate::storage::Storage;

/// Shared application state. The storage backend is chosen once at process
/// construction and injected here; handlers never branch on it again.
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
    pub contacts: ContactService,
    pub about: AboutService,
    pub tokens: TokenStore,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            catalog: CatalogService::new(storage.clone()),
            contacts: ContactService::new(storage.clone()),
            about: AboutService::new(storage),
            tokens: TokenStore::new(),
        }
    }
}
