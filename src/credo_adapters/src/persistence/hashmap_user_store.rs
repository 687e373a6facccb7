use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use credo_core::{Email, User, UserId, UserStore, UserStoreError};

#[derive(Default, Clone)]
pub struct HashMapUserStore {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl HashMapUserStore {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl UserStore for HashMapUserStore {
    async fn create(&self, user: User) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(user.uid()) || users.values().any(|u| u.email() == user.email()) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        users.insert(user.uid().clone(), user);
        Ok(())
    }

    async fn get_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError> {
        let users = self.users.read().await;
        Ok(users.values().find(|user| user.email() == email).cloned())
    }

    async fn get_by_id(&self, uid: &UserId) -> Result<Option<User>, UserStoreError> {
        let users = self.users.read().await;
        Ok(users.get(uid).cloned())
    }

    async fn update(&self, user: &User) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        let stored = users
            .get_mut(user.uid())
            .ok_or(UserStoreError::UserNotFound)?;
        *stored = user.clone();
        Ok(())
    }

    async fn delete(&self, uid: &UserId) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        users.remove(uid).ok_or(UserStoreError::UserNotFound)?;
        Ok(())
    }
}
