//! # Credo - Credential Service Library
//!
//! Facade crate that re-exports the public APIs of the credential service
//! components, so embedders depend on one crate.
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `User`, `Code`, etc.
//! - **Ports**: `UserStore`, `RefreshSessionStore`, `TokenIssuer`, `PasswordHasher`, `EmailClient`
//! - **Application**: `CredentialService`, `AccountService` and their use cases
//! - **Adapters**: `PostgresUserStore`, `RedisRefreshSessionStore`, `JwtTokenIssuer`, etc.
//! - **Service**: `CredoService` - the HTTP entry point

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use credo_core::*;
}

pub use credo_core::{
    AccountEvent, Code, Email, ErrorKind, EventName, Password, PasswordHash, PasswordPolicy, Role,
    TokenClaims, TokenKind, TokenPair, User, UserError, UserId, UserView,
};

// ============================================================================
// Ports
// ============================================================================

/// Port definitions implemented by the adapters
pub mod ports {
    pub use credo_core::{
        EmailClient, EventHandler, EventHandlerError, PasswordHasher, PasswordHasherError,
        RefreshSessionStore, RefreshSessionStoreError, TokenIssuer, TokenIssuerError, UserStore,
        UserStoreError,
    };
}

pub use ports::{EmailClient, EventHandler, PasswordHasher, RefreshSessionStore, TokenIssuer, UserStore};

// ============================================================================
// Application Layer
// ============================================================================

/// Use cases, services and the notification dispatcher
pub mod application {
    pub use credo_application::*;
}

pub use credo_application::{
    AccountError, AccountService, CredentialError, CredentialService, NotificationDispatcher,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers
    pub mod http {
        pub use credo_adapters::http::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use credo_adapters::persistence::*;
    }

    /// Email client implementations
    pub mod email {
        pub use credo_adapters::email::*;
    }

    /// Event handlers that turn account events into emails
    pub mod notifications {
        pub use credo_adapters::notifications::*;
    }

    /// Configuration
    pub mod config {
        pub use credo_adapters::config::*;
    }
}

pub use credo_adapters::{
    Argon2PasswordHasher, HashMapUserStore, HashSetRefreshSessionStore, JwtConfig, JwtTokenIssuer,
    MockEmailClient, PostgresUserStore, PostmarkEmailClient, RedisRefreshSessionStore,
    email_dispatcher,
};

// ============================================================================
// Credo Service (Main Entry Point)
// ============================================================================

pub use credo_service::{
    AppState, CredoService,
    helpers::{configure_postgresql, configure_redis, get_redis_client},
};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the ports
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
