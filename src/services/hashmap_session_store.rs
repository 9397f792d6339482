use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{SessionRecord, SessionStore, SessionStoreError};

/// In-memory session store. The single write lock around `rotate` gives the
/// same one-winner guarantee the SQL store gets from its transaction.
#[derive(Default)]
pub struct HashmapSessionStore {
    sessions: RwLock<HashMap<String, SessionRecord>>,
}

#[async_trait::async_trait]
impl SessionStore for HashmapSessionStore {
    async fn insert(
        &self,
        user_id: &str,
        access_token: &str,
        refresh_token: &str,
    ) -> Result<String, SessionStoreError> {
        let id = Uuid::new_v4().to_string();
        self.sessions.write().await.insert(
            id.clone(),
            SessionRecord {
                id: id.clone(),
                user_id: user_id.to_string(),
                access_token: access_token.to_string(),
                refresh_token: refresh_token.to_string(),
            },
        );
        Ok(id)
    }

    async fn find_by_refresh_token(&self, token: &str) -> Result<SessionRecord, SessionStoreError> {
        self.sessions
            .read()
            .await
            .values()
            .find(|r| r.refresh_token == token)
            .cloned()
            .ok_or(SessionStoreError::SessionNotFound)
    }

    async fn find_by_id(&self, id: &str) -> Result<SessionRecord, SessionStoreError> {
        self.sessions
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or(SessionStoreError::SessionNotFound)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), SessionStoreError> {
        self.sessions
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or(SessionStoreError::SessionNotFound)
    }

    async fn rotate(
        &self,
        old: &SessionRecord,
        new_access_token: &str,
        new_refresh_token: &str,
    ) -> Result<String, SessionStoreError> {
        let mut sessions = self.sessions.write().await;

        // The stored refresh token must still be the one presented; a
        // concurrent rotation already consumed it otherwise.
        let current = sessions
            .get(&old.id)
            .ok_or(SessionStoreError::SessionNotFound)?;
        if current.refresh_token != old.refresh_token {
            return Err(SessionStoreError::SessionNotFound);
        }

        sessions.remove(&old.id);
        let new_id = Uuid::new_v4().to_string();
        sessions.insert(
            new_id.clone(),
            SessionRecord {
                id: new_id.clone(),
                user_id: old.user_id.clone(),
                access_token: new_access_token.to_string(),
                refresh_token: new_refresh_token.to_string(),
            },
        );
        Ok(new_id)
    }

    async fn access_token_exists(
        &self,
        user_id: &str,
        access_token: &str,
    ) -> Result<bool, SessionStoreError> {
        Ok(self
            .sessions
            .read()
            .await
            .values()
            .any(|r| r.user_id == user_id && r.access_token == access_token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn rotate_is_single_use() {
        let store = HashmapSessionStore::default();
        let id = store.insert("u1", "a1", "r1").await.unwrap();
        let record = store.find_by_id(&id).await.unwrap();

        let new_id = store.rotate(&record, "a2", "r2").await.unwrap();
        assert_ne!(new_id, id);

        // The consumed record cannot rotate again.
        assert_eq!(
            store.rotate(&record, "a3", "r3").await,
            Err(SessionStoreError::SessionNotFound)
        );

        // The replacement is live and findable by its new token.
        let rotated = store.find_by_refresh_token("r2").await.unwrap();
        assert_eq!(rotated.id, new_id);
        assert_eq!(rotated.user_id, "u1");
    }

    #[tokio::test]
    async fn delete_surfaces_missing_sessions() {
        let store = HashmapSessionStore::default();
        let id = store.insert("u1", "a1", "r1").await.unwrap();

        store.delete_by_id(&id).await.unwrap();
        assert_eq!(
            store.delete_by_id(&id).await,
            Err(SessionStoreError::SessionNotFound)
        );
    }

    #[tokio::test]
    async fn access_liveness_requires_matching_user() {
        let store = HashmapSessionStore::default();
        store.insert("u1", "a1", "r1").await.unwrap();

        assert!(store.access_token_exists("u1", "a1").await.unwrap());
        assert!(!store.access_token_exists("u2", "a1").await.unwrap());
        assert!(!store.access_token_exists("u1", "a2").await.unwrap());
    }
}
