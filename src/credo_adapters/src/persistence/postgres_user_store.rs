use chrono::{DateTime, Utc};
use credo_core::{Email, User, UserId, UserRecord, UserStore, UserStoreError};
use sqlx::{FromRow, Pool, Postgres};

#[derive(Clone)]
pub struct PostgresUserStore {
    pool: sqlx::PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresUserStore { pool }
    }
}

const SELECT_USER: &str = r#"
    SELECT uid, email, password_hash, role, is_active,
           activation_code, activation_code_created_at,
           reset_code, reset_code_created_at,
           google_id, created_at
    FROM users
"#;

#[derive(FromRow)]
struct UserRow {
    uid: String,
    email: String,
    password_hash: Option<String>,
    role: String,
    is_active: bool,
    activation_code: Option<String>,
    activation_code_created_at: Option<DateTime<Utc>>,
    reset_code: Option<String>,
    reset_code_created_at: Option<DateTime<Utc>>,
    google_id: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = UserStoreError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        User::restore(UserRecord {
            uid: row.uid,
            email: row.email,
            password_hash: row.password_hash,
            role: row.role,
            is_active: row.is_active,
            activation_code: row.activation_code,
            activation_code_created_at: row.activation_code_created_at,
            reset_code: row.reset_code,
            reset_code_created_at: row.reset_code_created_at,
            google_id: row.google_id,
            created_at: row.created_at,
        })
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))
    }
}

fn map_write_error(e: sqlx::Error) -> UserStoreError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return UserStoreError::UserAlreadyExists;
        }
    }
    UserStoreError::UnexpectedError(e.to_string())
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn create(&self, user: User) -> Result<(), UserStoreError> {
        let record = user.to_record();

        sqlx::query(
            r#"
                INSERT INTO users (
                    uid, email, password_hash, role, is_active,
                    activation_code, activation_code_created_at,
                    reset_code, reset_code_created_at,
                    google_id, created_at
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(&record.uid)
        .bind(&record.email)
        .bind(&record.password_hash)
        .bind(&record.role)
        .bind(record.is_active)
        .bind(&record.activation_code)
        .bind(record.activation_code_created_at)
        .bind(&record.reset_code)
        .bind(record.reset_code_created_at)
        .bind(&record.google_id)
        .bind(record.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(())
    }

    #[tracing::instrument(name = "Retrieving user by email from PostgreSQL", skip_all)]
    async fn get_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError> {
        let row = sqlx::query_as::<_, UserRow>(&format!("{SELECT_USER} WHERE email = $1"))
            .bind(email.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        row.map(User::try_from).transpose()
    }

    #[tracing::instrument(name = "Retrieving user by id from PostgreSQL", skip_all)]
    async fn get_by_id(&self, uid: &UserId) -> Result<Option<User>, UserStoreError> {
        let row = sqlx::query_as::<_, UserRow>(&format!("{SELECT_USER} WHERE uid = $1"))
            .bind(uid.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        row.map(User::try_from).transpose()
    }

    #[tracing::instrument(name = "Updating user in PostgreSQL", skip_all)]
    async fn update(&self, user: &User) -> Result<(), UserStoreError> {
        let record = user.to_record();

        let result = sqlx::query(
            r#"
                UPDATE users
                SET email = $2,
                    password_hash = $3,
                    role = $4,
                    is_active = $5,
                    activation_code = $6,
                    activation_code_created_at = $7,
                    reset_code = $8,
                    reset_code_created_at = $9,
                    google_id = $10
                WHERE uid = $1
            "#,
        )
        .bind(&record.uid)
        .bind(&record.email)
        .bind(&record.password_hash)
        .bind(&record.role)
        .bind(record.is_active)
        .bind(&record.activation_code)
        .bind(record.activation_code_created_at)
        .bind(&record.reset_code)
        .bind(record.reset_code_created_at)
        .bind(&record.google_id)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        if result.rows_affected() == 0 {
            return Err(UserStoreError::UserNotFound);
        }

        Ok(())
    }

    #[tracing::instrument(name = "Delete user from PostgreSQL", skip_all)]
    async fn delete(&self, uid: &UserId) -> Result<(), UserStoreError> {
        let result = sqlx::query(
            r#"
                DELETE FROM users
                WHERE uid = $1
            "#,
        )
        .bind(uid.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(UserStoreError::UserNotFound);
        }

        Ok(())
    }
}
