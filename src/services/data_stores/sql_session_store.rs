use std::time::Duration;

use sqlx::PgPool;
use tokio::time::timeout;
use tracing::error;
use uuid::Uuid;

use crate::domain::{SessionRecord, SessionStore, SessionStoreError};
use crate::utils::consts::STORE_TIMEOUT_SECONDS;

pub struct SqlSessionStore {
    pool: PgPool,
}

impl SqlSessionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct SessionRow {
    id: String,
    user_id: String,
    access_token: String,
    refresh_token: String,
}

impl From<SessionRow> for SessionRecord {
    fn from(row: SessionRow) -> Self {
        SessionRecord {
            id: row.id,
            user_id: row.user_id,
            access_token: row.access_token,
            refresh_token: row.refresh_token,
        }
    }
}

fn store_timeout() -> Duration {
    Duration::from_secs(STORE_TIMEOUT_SECONDS)
}

#[async_trait::async_trait]
impl SessionStore for SqlSessionStore {
    async fn insert(
        &self,
        user_id: &str,
        access_token: &str,
        refresh_token: &str,
    ) -> Result<String, SessionStoreError> {
        let id = Uuid::new_v4().to_string();
        let query = sqlx::query(
            r#"
            INSERT INTO sessions (id, user_id, access_token, refresh_token)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&id)
        .bind(user_id)
        .bind(access_token)
        .bind(refresh_token)
        .execute(&self.pool);

        match timeout(store_timeout(), query).await {
            Err(_) => Err(SessionStoreError::Timeout),
            Ok(Err(e)) => {
                error!("session insert failed: {e}");
                Err(SessionStoreError::UnexpectedError)
            }
            Ok(Ok(_)) => Ok(id),
        }
    }

    async fn find_by_refresh_token(&self, token: &str) -> Result<SessionRecord, SessionStoreError> {
        let query = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT id, user_id, access_token, refresh_token
            FROM sessions
            WHERE refresh_token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool);

        match timeout(store_timeout(), query).await {
            Err(_) => Err(SessionStoreError::Timeout),
            Ok(Err(e)) => {
                error!("session lookup failed: {e}");
                Err(SessionStoreError::UnexpectedError)
            }
            Ok(Ok(None)) => Err(SessionStoreError::SessionNotFound),
            Ok(Ok(Some(row))) => Ok(row.into()),
        }
    }

    async fn find_by_id(&self, id: &str) -> Result<SessionRecord, SessionStoreError> {
        let query = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT id, user_id, access_token, refresh_token
            FROM sessions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool);

        match timeout(store_timeout(), query).await {
            Err(_) => Err(SessionStoreError::Timeout),
            Ok(Err(e)) => {
                error!("session lookup failed: {e}");
                Err(SessionStoreError::UnexpectedError)
            }
            Ok(Ok(None)) => Err(SessionStoreError::SessionNotFound),
            Ok(Ok(Some(row))) => Ok(row.into()),
        }
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), SessionStoreError> {
        let query = sqlx::query(r#"DELETE FROM sessions WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool);

        match timeout(store_timeout(), query).await {
            Err(_) => Err(SessionStoreError::Timeout),
            Ok(Err(e)) => {
                error!("session delete failed: {e}");
                Err(SessionStoreError::UnexpectedError)
            }
            Ok(Ok(done)) if done.rows_affected() == 0 => Err(SessionStoreError::SessionNotFound),
            Ok(Ok(_)) => Ok(()),
        }
    }

    async fn rotate(
        &self,
        old: &SessionRecord,
        new_access_token: &str,
        new_refresh_token: &str,
    ) -> Result<String, SessionStoreError> {
        // Delete-old and insert-new commit together. The delete is guarded by
        // the presented refresh token, so concurrent rotations of the same
        // token resolve to exactly one winner.
        let rotation = async {
            let mut tx = self.pool.begin().await?;

            let deleted = sqlx::query(
                r#"DELETE FROM sessions WHERE id = $1 AND refresh_token = $2"#,
            )
            .bind(&old.id)
            .bind(&old.refresh_token)
            .execute(&mut *tx)
            .await?
            .rows_affected();

            if deleted == 0 {
                tx.rollback().await?;
                return Ok(None);
            }

            let new_id = Uuid::new_v4().to_string();
            sqlx::query(
                r#"
                INSERT INTO sessions (id, user_id, access_token, refresh_token)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(&new_id)
            .bind(&old.user_id)
            .bind(new_access_token)
            .bind(new_refresh_token)
            .execute(&mut *tx)
            .await?;

            tx.commit().await?;
            Ok::<_, sqlx::Error>(Some(new_id))
        };

        match timeout(store_timeout(), rotation).await {
            Err(_) => Err(SessionStoreError::Timeout),
            Ok(Err(e)) => {
                error!("session rotation failed: {e}");
                Err(SessionStoreError::UnexpectedError)
            }
            Ok(Ok(None)) => Err(SessionStoreError::SessionNotFound),
            Ok(Ok(Some(new_id))) => Ok(new_id),
        }
    }

    async fn access_token_exists(
        &self,
        user_id: &str,
        access_token: &str,
    ) -> Result<bool, SessionStoreError> {
        let query = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM sessions
                WHERE user_id = $1 AND access_token = $2
            )
            "#,
        )
        .bind(user_id)
        .bind(access_token)
        .fetch_one(&self.pool);

        match timeout(store_timeout(), query).await {
            Err(_) => Err(SessionStoreError::Timeout),
            Ok(Err(e)) => {
                error!("session liveness check failed: {e}");
                Err(SessionStoreError::UnexpectedError)
            }
            Ok(Ok(exists)) => Ok(exists),
        }
    }
}
