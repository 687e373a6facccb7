use std::sync::Arc;

use credo_adapters::config::{PostgresSettings, RedisSettings};
use redis::{Client, RedisResult};
use secrecy::ExposeSecret;
use sqlx::{PgPool, postgres::PgPoolOptions};
use tokio::sync::RwLock;

/// Configure and return a PostgreSQL connection pool
///
/// Connects with the configured pool size and runs all pending migrations.
pub async fn configure_postgresql(settings: &PostgresSettings) -> Result<PgPool, sqlx::Error> {
    let pg_pool = get_postgres_pool(settings.url.expose_secret(), settings.max_connections).await?;

    sqlx::migrate!().run(&pg_pool).await?;

    Ok(pg_pool)
}

/// Configure and return a shared Redis connection
pub fn configure_redis(settings: &RedisSettings) -> RedisResult<Arc<RwLock<redis::Connection>>> {
    let connection = get_redis_client(&settings.host_name)?.get_connection()?;
    Ok(Arc::new(RwLock::new(connection)))
}

/// Create a PostgreSQL connection pool
pub async fn get_postgres_pool(url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(url)
        .await
}

/// Create a Redis client
///
/// # Arguments
/// * `redis_hostname` - Redis server hostname
pub fn get_redis_client(redis_hostname: &str) -> RedisResult<Client> {
    let redis_url = format!("redis://{}/", redis_hostname);
    redis::Client::open(redis_url)
}
