use std::time::Duration;

use axum::http::HeaderValue;
use config::{Config, ConfigError, Environment, File};
use credo_core::{DEFAULT_MIN_PASSWORD_LENGTH, DEFAULT_PASSWORD_RULES, PasswordPolicy};
use secrecy::Secret;
use serde::Deserialize;

use super::constants::{BASE_CONFIG_FILE, CONFIG_DIR, env, prod};

#[derive(Debug, Clone, Deserialize)]
pub struct CredoSettings {
    pub application: ApplicationSettings,
    pub backends: BackendSettings,
    pub jwt: JwtSettings,
    pub postgres: PostgresSettings,
    pub redis: RedisSettings,
    pub email_client: EmailClientSettings,
    pub links: LinkSettings,
    pub password_policy: PasswordPolicySettings,
    pub allowed_origins: AllowedOrigins,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub address: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStoreBackend {
    InMemory,
    Postgres,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefreshSessionBackend {
    InMemory,
    Redis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailBackend {
    Mock,
    Postmark,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendSettings {
    pub user_store: UserStoreBackend,
    pub refresh_sessions: RefreshSessionBackend,
    pub email: EmailBackend,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtSettings {
    pub secret: Secret<String>,
    pub access_ttl_seconds: i64,
    pub refresh_ttl_seconds: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSettings {
    pub url: Secret<String>,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RedisSettings {
    pub host_name: String,
    pub session_ttl_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub sender: String,
    pub auth_token: Secret<String>,
    pub timeout_millis: u64,
}

impl EmailClientSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_millis)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LinkSettings {
    pub activation_url: String,
    pub reset_password_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PasswordPolicySettings {
    pub min_length: usize,
    pub rules: Vec<String>,
}

impl PasswordPolicySettings {
    pub fn to_policy(&self) -> Result<PasswordPolicy, ConfigError> {
        PasswordPolicy::new(self.min_length, &self.rules)
            .map_err(|e| ConfigError::Message(format!("invalid password rule: {e}")))
    }
}

/// CORS origins, configured as one comma separated string.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "String")]
pub struct AllowedOrigins(Vec<String>);

impl From<String> for AllowedOrigins {
    fn from(value: String) -> Self {
        Self(
            value
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_owned)
                .collect(),
        )
    }
}

impl AllowedOrigins {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        origin
            .to_str()
            .is_ok_and(|origin| self.0.iter().any(|allowed| allowed == origin))
    }
}

impl CredoSettings {
    /// Loads settings from built-in defaults, `config/base`, `config/{CREDO_ENVIRONMENT}`
    /// and `CREDO__*` environment variables, in increasing precedence.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = std::env::var(env::CREDO_ENVIRONMENT_ENV_VAR).ok();
        let mut builder = Self::defaults()?
            .add_source(File::with_name(&format!("{CONFIG_DIR}/{BASE_CONFIG_FILE}")).required(false));

        if let Some(environment) = environment {
            builder = builder
                .add_source(File::with_name(&format!("{CONFIG_DIR}/{environment}")).required(false));
        }

        builder
            .add_source(
                Environment::with_prefix(env::CREDO_ENV_PREFIX).separator(env::CREDO_ENV_SEPARATOR),
            )
            .build()?
            .try_deserialize()
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        let default_rules: Vec<String> = DEFAULT_PASSWORD_RULES
            .iter()
            .map(|rule| rule.to_string())
            .collect();

        Config::builder()
            .set_default("application.address", prod::APP_ADDRESS)?
            .set_default("backends.user_store", "in_memory")?
            .set_default("backends.refresh_sessions", "in_memory")?
            .set_default("backends.email", "mock")?
            .set_default("jwt.secret", "")?
            .set_default("jwt.access_ttl_seconds", prod::ACCESS_TTL_SECONDS)?
            .set_default("jwt.refresh_ttl_seconds", prod::REFRESH_TTL_SECONDS)?
            .set_default("postgres.url", "")?
            .set_default("postgres.max_connections", prod::POSTGRES_MAX_CONNECTIONS)?
            .set_default("redis.host_name", prod::REDIS_HOST_NAME)?
            .set_default("redis.session_ttl_seconds", prod::SESSION_TTL_SECONDS)?
            .set_default("email_client.base_url", prod::email_client::BASE_URL)?
            .set_default("email_client.sender", prod::email_client::SENDER)?
            .set_default("email_client.auth_token", "")?
            .set_default("email_client.timeout_millis", prod::email_client::TIMEOUT_MILLIS)?
            .set_default("links.activation_url", prod::links::ACTIVATION_URL)?
            .set_default("links.reset_password_url", prod::links::RESET_PASSWORD_URL)?
            .set_default("password_policy.min_length", DEFAULT_MIN_PASSWORD_LENGTH as u64)?
            .set_default("password_policy.rules", default_rules)?
            .set_default("allowed_origins", "")
    }
}
