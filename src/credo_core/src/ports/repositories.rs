use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{email::Email, user::User, user_id::UserId};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User not found")]
    UserNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UserAlreadyExists, Self::UserAlreadyExists)
                | (Self::UserNotFound, Self::UserNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Persistence for accounts. Each call must be atomic for a single account.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create(&self, user: User) -> Result<(), UserStoreError>;
    async fn get_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError>;
    async fn get_by_id(&self, uid: &UserId) -> Result<Option<User>, UserStoreError>;
    /// Full-document replace of an existing account.
    async fn update(&self, user: &User) -> Result<(), UserStoreError>;
    async fn delete(&self, uid: &UserId) -> Result<(), UserStoreError>;
}

#[async_trait]
impl<T: UserStore + ?Sized> UserStore for Arc<T> {
    async fn create(&self, user: User) -> Result<(), UserStoreError> {
        (**self).create(user).await
    }

    async fn get_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError> {
        (**self).get_by_email(email).await
    }

    async fn get_by_id(&self, uid: &UserId) -> Result<Option<User>, UserStoreError> {
        (**self).get_by_id(uid).await
    }

    async fn update(&self, user: &User) -> Result<(), UserStoreError> {
        (**self).update(user).await
    }

    async fn delete(&self, uid: &UserId) -> Result<(), UserStoreError> {
        (**self).delete(uid).await
    }
}

// RefreshSessionStore port trait and errors
#[derive(Debug, Error)]
pub enum RefreshSessionStoreError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Live refresh tokens. Presence of a key is the only thing that makes a
/// refresh token usable.
#[async_trait]
pub trait RefreshSessionStore: Send + Sync {
    async fn save(&self, token: String) -> Result<(), RefreshSessionStoreError>;
    async fn get(&self, token: &str) -> Result<Option<String>, RefreshSessionStoreError>;
    /// Removing an unknown token is not an error.
    async fn delete(&self, token: &str) -> Result<(), RefreshSessionStoreError>;
}

#[async_trait]
impl<T: RefreshSessionStore + ?Sized> RefreshSessionStore for Arc<T> {
    async fn save(&self, token: String) -> Result<(), RefreshSessionStoreError> {
        (**self).save(token).await
    }

    async fn get(&self, token: &str) -> Result<Option<String>, RefreshSessionStoreError> {
        (**self).get(token).await
    }

    async fn delete(&self, token: &str) -> Result<(), RefreshSessionStoreError> {
        (**self).delete(token).await
    }
}
