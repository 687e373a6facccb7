pub mod hashmap_user_store;
pub mod hashset_refresh_session_store;
pub mod postgres_user_store;
pub mod redis_refresh_session_store;

pub use hashmap_user_store::HashMapUserStore;
pub use hashset_refresh_session_store::HashSetRefreshSessionStore;
pub use postgres_user_store::PostgresUserStore;
pub use redis_refresh_session_store::RedisRefreshSessionStore;
