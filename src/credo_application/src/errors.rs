use credo_core::{
    ErrorKind, PasswordHasherError, RefreshSessionStoreError, TokenIssuerError, UserError,
    UserStoreError,
};

/// Errors of the sign-in / token lifecycle.
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("User is inactive")]
    InactiveUser,
    #[error("Invalid refresh token")]
    InvalidRefreshToken,
    #[error("Invalid token")]
    InvalidToken,
    #[error("{0}")]
    Validation(#[from] UserError),
    #[error("Server problem, please try again later")]
    ServerProblem,
}

impl CredentialError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CredentialError::InvalidCredentials
            | CredentialError::InactiveUser
            | CredentialError::InvalidRefreshToken
            | CredentialError::InvalidToken => ErrorKind::Auth,
            CredentialError::Validation(_) => ErrorKind::Validation,
            CredentialError::ServerProblem => ErrorKind::StoreUnavailable,
        }
    }
}

impl From<UserStoreError> for CredentialError {
    fn from(error: UserStoreError) -> Self {
        tracing::error!(error = %error, "User store failure");
        CredentialError::ServerProblem
    }
}

impl From<RefreshSessionStoreError> for CredentialError {
    fn from(error: RefreshSessionStoreError) -> Self {
        tracing::error!(error = %error, "Refresh session store failure");
        CredentialError::ServerProblem
    }
}

impl From<PasswordHasherError> for CredentialError {
    fn from(error: PasswordHasherError) -> Self {
        tracing::error!(error = %error, "Password hasher failure");
        CredentialError::ServerProblem
    }
}

impl From<TokenIssuerError> for CredentialError {
    fn from(error: TokenIssuerError) -> Self {
        match error {
            TokenIssuerError::InvalidToken => CredentialError::InvalidToken,
            TokenIssuerError::UnexpectedError(e) => {
                tracing::error!(error = %e, "Token issuer failure");
                CredentialError::ServerProblem
            }
        }
    }
}

/// Errors of the account lifecycle.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("{0}")]
    Validation(#[from] UserError),
    #[error("User not found")]
    UserNotFound,
    #[error("User already registered")]
    AlreadyRegistered,
    #[error("Request already pending, please wait for the current code to expire")]
    RequestPending,
    #[error("User is inactive")]
    InactiveUser,
    #[error("Reset code expired")]
    ResetCodeExpired,
    #[error("Server problem, please try again later")]
    ServerProblem,
}

impl AccountError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountError::Validation(_) => ErrorKind::Validation,
            AccountError::UserNotFound => ErrorKind::NotFound,
            AccountError::AlreadyRegistered | AccountError::RequestPending => ErrorKind::Conflict,
            AccountError::InactiveUser => ErrorKind::Auth,
            AccountError::ResetCodeExpired => ErrorKind::Expired,
            AccountError::ServerProblem => ErrorKind::StoreUnavailable,
        }
    }
}

impl From<UserStoreError> for AccountError {
    fn from(error: UserStoreError) -> Self {
        match error {
            UserStoreError::UserAlreadyExists => AccountError::AlreadyRegistered,
            UserStoreError::UserNotFound => AccountError::UserNotFound,
            UserStoreError::UnexpectedError(e) => {
                tracing::error!(error = %e, "User store failure");
                AccountError::ServerProblem
            }
        }
    }
}

impl From<PasswordHasherError> for AccountError {
    fn from(error: PasswordHasherError) -> Self {
        tracing::error!(error = %error, "Password hasher failure");
        AccountError::ServerProblem
    }
}
