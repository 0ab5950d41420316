//! In-memory session token store.
//!
//! Tokens are opaque strings with exactly two states: active and absent.
//! They are inserted on login, removed on logout, and never expire on their
//! own. The store lives only in process memory; restarting the server
//! invalidates every session.

use chrono::Utc;
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Handle to the active-token set. Cheap to clone; all clones share state.
#[derive(Clone, Default)]
pub struct TokenStore {
    tokens: Arc<RwLock<HashSet<String>>>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a fresh token, guaranteed unique among active tokens, and
    /// mark it active.
    pub async fn issue(&self) -> String {
        let mut tokens = self.tokens.write().await;
        loop {
            let candidate = generate_token();
            if tokens.insert(candidate.clone()) {
                return candidate;
            }
        }
    }

    /// True iff the token is currently active.
    pub async fn authorize(&self, token: &str) -> bool {
        self.tokens.read().await.contains(token)
    }

    /// Remove a token. Idempotent; revoking an absent token is not an error.
    pub async fn revoke(&self, token: &str) -> bool {
        self.tokens.write().await.remove(token)
    }

    #[cfg(test)]
    pub async fn active_count(&self) -> usize {
        self.tokens.read().await.len()
    }
}

/// Opaque credential derived from the current time plus a random component.
fn generate_token() -> String {
    let mut hasher = Sha256::new();
    hasher.update(
        Utc::now()
            .timestamp_nanos_opt()
            .unwrap_or_default()
            .to_be_bytes(),
    );
    hasher.update(Uuid::new_v4().as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn issued_tokens_authorize_until_revoked() {
        let store = TokenStore::new();
        let token = store.issue().await;

        assert!(store.authorize(&token).await);
        assert!(store.revoke(&token).await);
        assert!(!store.authorize(&token).await);
        // Second revoke is a no-op, not an error
        assert!(!store.revoke(&token).await);
    }

    #[tokio::test]
    async fn tokens_are_unique() {
        let store = TokenStore::new();
        let a = store.issue().await;
        let b = store.issue().await;
        assert_ne!(a, b);
        assert_eq!(store.active_count().await, 2);
    }

    #[tokio::test]
    async fn concurrent_login_and_logout_stay_consistent() {
        let store = TokenStore::new();
        let mut handles = Vec::new();
        for _ in 0..16 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                let token = store.issue().await;
                assert!(store.authorize(&token).await);
                assert!(store.revoke(&token).await);
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }
        assert_eq!(store.active_count().await, 0);
    }
}
