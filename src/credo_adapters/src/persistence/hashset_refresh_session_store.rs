use std::sync::Arc;

use credo_core::{RefreshSessionStore, RefreshSessionStoreError};
use dashmap::DashSet;

/// Live refresh tokens kept in process memory. Entries never expire; the
/// token's own `exp` still bounds how long one can be used.
#[derive(Debug, Default, Clone)]
pub struct HashSetRefreshSessionStore {
    tokens: Arc<DashSet<String>>,
}

impl HashSetRefreshSessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl RefreshSessionStore for HashSetRefreshSessionStore {
    async fn save(&self, token: String) -> Result<(), RefreshSessionStoreError> {
        self.tokens.insert(token);
        Ok(())
    }

    async fn get(&self, token: &str) -> Result<Option<String>, RefreshSessionStoreError> {
        Ok(self.tokens.get(token).map(|entry| entry.key().clone()))
    }

    async fn delete(&self, token: &str) -> Result<(), RefreshSessionStoreError> {
        self.tokens.remove(token);
        Ok(())
    }
}
