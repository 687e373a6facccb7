pub mod config;
pub mod email;
pub mod hashing;
pub mod http;
pub mod notifications;
pub mod persistence;
pub mod tokens;

pub use email::{MockEmailClient, PostmarkEmailClient, SentEmail};
pub use hashing::Argon2PasswordHasher;
pub use notifications::email_dispatcher;
pub use persistence::{
    HashMapUserStore, HashSetRefreshSessionStore, PostgresUserStore, RedisRefreshSessionStore,
};
pub use tokens::{JwtConfig, JwtTokenIssuer};
