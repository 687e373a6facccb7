use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    email::Email,
    events::AccountEvent,
    password::{Password, PasswordHash},
    token::{TokenClaims, TokenPair, VerifiedToken},
};

#[derive(Debug, Error)]
pub enum PasswordHasherError {
    #[error("Failed to hash password: {0}")]
    HashingFailed(String),
    #[error("Malformed password hash: {0}")]
    MalformedHash(String),
}

/// Port trait for password hashing
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, PasswordHasherError>;
    async fn compare(
        &self,
        password: &Password,
        hash: &PasswordHash,
    ) -> Result<bool, PasswordHasherError>;
}

#[async_trait]
impl<T: PasswordHasher + ?Sized> PasswordHasher for Arc<T> {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, PasswordHasherError> {
        (**self).hash(password).await
    }

    async fn compare(
        &self,
        password: &Password,
        hash: &PasswordHash,
    ) -> Result<bool, PasswordHasherError> {
        (**self).compare(password, hash).await
    }
}

#[derive(Debug, Error)]
pub enum TokenIssuerError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

/// Port trait for signing and verifying bearer/refresh credentials
#[async_trait]
pub trait TokenIssuer: Send + Sync {
    async fn sign(&self, claims: &TokenClaims) -> Result<TokenPair, TokenIssuerError>;
    async fn verify(&self, token: &str) -> Result<VerifiedToken, TokenIssuerError>;
}

#[async_trait]
impl<T: TokenIssuer + ?Sized> TokenIssuer for Arc<T> {
    async fn sign(&self, claims: &TokenClaims) -> Result<TokenPair, TokenIssuerError> {
        (**self).sign(claims).await
    }

    async fn verify(&self, token: &str) -> Result<VerifiedToken, TokenIssuerError> {
        (**self).verify(token).await
    }
}

/// Port trait for email sending service
#[async_trait]
pub trait EmailClient: Send + Sync {
    async fn send_email(
        &self,
        recipient: &Email,
        subject: &str,
        content: &str,
        html_content: Option<&str>,
    ) -> Result<(), String>;
}

#[async_trait]
impl<T: EmailClient + ?Sized> EmailClient for Arc<T> {
    async fn send_email(
        &self,
        recipient: &Email,
        subject: &str,
        content: &str,
        html_content: Option<&str>,
    ) -> Result<(), String> {
        (**self)
            .send_email(recipient, subject, content, html_content)
            .await
    }
}

#[derive(Debug, Error)]
pub enum EventHandlerError {
    #[error("Failed to render notification: {0}")]
    RenderError(String),
    #[error("Failed to deliver notification: {0}")]
    DeliveryError(String),
}

/// Side effect run by the dispatcher after an account transition committed.
#[async_trait]
pub trait EventHandler: Send + Sync {
    async fn handle(&self, event: &AccountEvent) -> Result<(), EventHandlerError>;
}
