use std::sync::Arc;

use color_eyre::eyre::{Result, WrapErr};
use credo_adapters::{
    Argon2PasswordHasher, HashMapUserStore, HashSetRefreshSessionStore, JwtConfig, JwtTokenIssuer,
    MockEmailClient, PostgresUserStore, PostmarkEmailClient, RedisRefreshSessionStore,
    config::{CredoSettings, EmailBackend, RefreshSessionBackend, UserStoreBackend},
    email_dispatcher,
};
use credo_application::{AccountService, CredentialService};
use credo_core::{Email, EmailClient, RefreshSessionStore, UserStore};
use credo_service::{
    CredoService,
    helpers::{configure_postgresql, configure_redis},
};
use reqwest::Client as HttpClient;
use secrecy::ExposeSecret;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let config = CredoSettings::load().wrap_err("Failed to load settings")?;

    if config.jwt.secret.expose_secret().is_empty() {
        color_eyre::eyre::bail!("CREDO__JWT__SECRET must be set");
    }

    let user_store: Arc<dyn UserStore> = match config.backends.user_store {
        UserStoreBackend::InMemory => Arc::new(HashMapUserStore::new()),
        UserStoreBackend::Postgres => {
            let pg_pool = configure_postgresql(&config.postgres)
                .await
                .wrap_err("Failed to set up PostgreSQL")?;
            Arc::new(PostgresUserStore::new(pg_pool))
        }
    };

    let refresh_sessions: Arc<dyn RefreshSessionStore> = match config.backends.refresh_sessions {
        RefreshSessionBackend::InMemory => Arc::new(HashSetRefreshSessionStore::new()),
        RefreshSessionBackend::Redis => {
            let conn = configure_redis(&config.redis).wrap_err("Failed to connect to Redis")?;
            Arc::new(RedisRefreshSessionStore::new(
                conn,
                config.redis.session_ttl_seconds,
            ))
        }
    };

    let email_client: Arc<dyn EmailClient> = match config.backends.email {
        EmailBackend::Mock => Arc::new(MockEmailClient::new()),
        EmailBackend::Postmark => {
            let http_client = HttpClient::builder()
                .timeout(config.email_client.timeout())
                .build()?;
            Arc::new(PostmarkEmailClient::new(
                config.email_client.base_url.clone(),
                Email::parse(config.email_client.sender.clone())?,
                config.email_client.auth_token.clone(),
                http_client,
            ))
        }
    };

    let password_hasher = Argon2PasswordHasher::new();
    let token_issuer = JwtTokenIssuer::new(JwtConfig {
        secret: config.jwt.secret.clone(),
        access_ttl_seconds: config.jwt.access_ttl_seconds,
        refresh_ttl_seconds: config.jwt.refresh_ttl_seconds,
    });
    let dispatcher = email_dispatcher(email_client, &config.links);
    let password_policy = config.password_policy.to_policy()?;

    let credentials = CredentialService::new(
        user_store.clone(),
        password_hasher.clone(),
        token_issuer,
        refresh_sessions,
    );
    let accounts = AccountService::new(user_store, password_hasher, dispatcher, password_policy);

    let listener = tokio::net::TcpListener::bind(&config.application.address).await?;
    tracing::info!(
        user_store = ?config.backends.user_store,
        refresh_sessions = ?config.backends.refresh_sessions,
        email = ?config.backends.email,
        "Starting credo service"
    );

    CredoService::new(credentials, accounts)
        .run_standalone(listener, Some(config.allowed_origins.clone()))
        .await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
