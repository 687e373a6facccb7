pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    code::{CODE_TTL_SECONDS, Code},
    email::Email,
    error_kind::ErrorKind,
    events::{AccountEvent, EventName},
    password::{
        DEFAULT_MIN_PASSWORD_LENGTH, DEFAULT_PASSWORD_RULES, Password, PasswordHash, PasswordPolicy,
    },
    role::Role,
    token::{TokenClaims, TokenKind, TokenPair, VerifiedToken},
    user::{NewUser, User, UserError, UserRecord, UserView},
    user_id::UserId,
};

pub use ports::{
    repositories::{RefreshSessionStore, RefreshSessionStoreError, UserStore, UserStoreError},
    services::{
        EmailClient, EventHandler, EventHandlerError, PasswordHasher, PasswordHasherError,
        TokenIssuer, TokenIssuerError,
    },
};
