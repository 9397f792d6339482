use std::time::Duration;

use sqlx::PgPool;
use tokio::time::timeout;
use tracing::error;
use uuid::Uuid;

use crate::domain::{Email, NewUser, User, UserStore, UserStoreError};
use crate::utils::consts::STORE_TIMEOUT_SECONDS;

pub struct SqlUserStore {
    pool: PgPool,
}

impl SqlUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: String,
    email: String,
    username: String,
    password_hash: String,
    role_id: i32,
}

impl UserRow {
    fn into_user(self) -> Result<User, UserStoreError> {
        // A stored email that no longer parses is corrupt data, not a miss.
        let email = Email::parse(self.email).map_err(|_| UserStoreError::UnexpectedError)?;
        Ok(User {
            id: self.id,
            email,
            username: self.username,
            password_hash: self.password_hash,
            role_id: self.role_id,
        })
    }
}

fn store_timeout() -> Duration {
    Duration::from_secs(STORE_TIMEOUT_SECONDS)
}

#[async_trait::async_trait]
impl UserStore for SqlUserStore {
    async fn insert(&self, new_user: NewUser) -> Result<String, UserStoreError> {
        let id = Uuid::new_v4().to_string();
        let query = sqlx::query(
            r#"
            INSERT INTO users (id, email, username, password_hash, role_id)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&id)
        .bind(new_user.email.as_ref())
        .bind(&new_user.username)
        .bind(&new_user.password_hash)
        .bind(new_user.role_id)
        .execute(&self.pool);

        match timeout(store_timeout(), query).await {
            Err(_) => Err(UserStoreError::Timeout),
            Ok(Err(sqlx::Error::Database(db))) if db.is_unique_violation() => {
                Err(UserStoreError::UserAlreadyExists)
            }
            Ok(Err(e)) => {
                error!("user insert failed: {e}");
                Err(UserStoreError::UnexpectedError)
            }
            Ok(Ok(_)) => Ok(id),
        }
    }

    async fn find_by_email_or_username(&self, ident: &str) -> Result<User, UserStoreError> {
        let query = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, username, password_hash, role_id
            FROM users
            WHERE email = $1 OR username = $1
            "#,
        )
        .bind(ident)
        .fetch_optional(&self.pool);

        match timeout(store_timeout(), query).await {
            Err(_) => Err(UserStoreError::Timeout),
            Ok(Err(e)) => {
                error!("user lookup failed: {e}");
                Err(UserStoreError::UnexpectedError)
            }
            Ok(Ok(None)) => Err(UserStoreError::UserNotFound),
            Ok(Ok(Some(row))) => row.into_user(),
        }
    }

    async fn find_by_id(&self, id: &str) -> Result<User, UserStoreError> {
        let query = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, username, password_hash, role_id
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool);

        match timeout(store_timeout(), query).await {
            Err(_) => Err(UserStoreError::Timeout),
            Ok(Err(e)) => {
                error!("user lookup failed: {e}");
                Err(UserStoreError::UnexpectedError)
            }
            Ok(Ok(None)) => Err(UserStoreError::UserNotFound),
            Ok(Ok(Some(row))) => row.into_user(),
        }
    }

    async fn count_distinct_roles(&self) -> Result<usize, UserStoreError> {
        let query = sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM roles"#)
            .fetch_one(&self.pool);

        match timeout(store_timeout(), query).await {
            Err(_) => Err(UserStoreError::Timeout),
            Ok(Err(e)) => {
                error!("role count failed: {e}");
                Err(UserStoreError::UnexpectedError)
            }
            Ok(Ok(count)) => Ok(count as usize),
        }
    }
}
