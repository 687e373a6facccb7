pub mod constants;
pub mod settings;

pub use constants::*;
pub use settings::{
    AllowedOrigins, ApplicationSettings, BackendSettings, CredoSettings, EmailBackend,
    EmailClientSettings, JwtSettings, LinkSettings, PasswordPolicySettings, PostgresSettings,
    RedisSettings, RefreshSessionBackend, UserStoreBackend,
};
