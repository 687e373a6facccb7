use std::sync::Arc;

use credo_core::{RefreshSessionStore, RefreshSessionStoreError};
use redis::{Commands, Connection};
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct RedisRefreshSessionStore {
    conn: Arc<RwLock<Connection>>,
    session_ttl: u64,
}

impl RedisRefreshSessionStore {
    pub fn new(conn: Arc<RwLock<Connection>>, session_ttl: u64) -> Self {
        Self { conn, session_ttl }
    }
}

#[async_trait::async_trait]
impl RefreshSessionStore for RedisRefreshSessionStore {
    #[tracing::instrument(name = "Saving refresh session to Redis", skip_all)]
    async fn save(&self, token: String) -> Result<(), RefreshSessionStoreError> {
        let key = get_key(&token);

        let mut conn = self.conn.write().await;
        conn.set_ex(key, true, self.session_ttl)
            .map_err(|e| RefreshSessionStoreError::DatabaseError(e.to_string()))
    }

    #[tracing::instrument(name = "Looking up refresh session in Redis", skip_all)]
    async fn get(&self, token: &str) -> Result<Option<String>, RefreshSessionStoreError> {
        let key = get_key(token);

        let mut conn = self.conn.write().await;
        let exists: bool = conn
            .exists(&key)
            .map_err(|e| RefreshSessionStoreError::DatabaseError(e.to_string()))?;

        Ok(exists.then(|| token.to_owned()))
    }

    #[tracing::instrument(name = "Deleting refresh session from Redis", skip_all)]
    async fn delete(&self, token: &str) -> Result<(), RefreshSessionStoreError> {
        let key = get_key(token);

        let mut conn = self.conn.write().await;
        conn.del::<_, ()>(&key)
            .map_err(|e| RefreshSessionStoreError::DatabaseError(e.to_string()))
    }
}

const REFRESH_TOKEN_KEY_PREFIX: &str = "refresh_token:";

fn get_key(token: &str) -> String {
    format!("{}{}", REFRESH_TOKEN_KEY_PREFIX, token)
}
