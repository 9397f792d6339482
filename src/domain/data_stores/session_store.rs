#[derive(Clone, Debug, PartialEq)]
pub struct SessionRecord {
    pub id: String,
    pub user_id: String,
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, PartialEq)]
pub enum SessionStoreError {
    SessionNotFound,
    Timeout,
    UnexpectedError,
}

/// Server-side registry of live sessions. A token pair is only as good as its
/// row here: deleting the row revokes both halves before natural expiry.
#[async_trait::async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the generated session id.
    async fn insert(
        &self,
        user_id: &str,
        access_token: &str,
        refresh_token: &str,
    ) -> Result<String, SessionStoreError>;

    async fn find_by_refresh_token(&self, token: &str) -> Result<SessionRecord, SessionStoreError>;

    async fn find_by_id(&self, id: &str) -> Result<SessionRecord, SessionStoreError>;

    /// Missing id is an error, not a no-op; sign-out surfaces it to the client.
    async fn delete_by_id(&self, id: &str) -> Result<(), SessionStoreError>;

    /// Atomically replace `old` with a fresh record holding the new pair,
    /// returning the new session id. The removal is guarded by the old refresh
    /// token, so of two concurrent rotations of the same token exactly one
    /// wins; the loser gets `SessionNotFound`.
    async fn rotate(
        &self,
        old: &SessionRecord,
        new_access_token: &str,
        new_refresh_token: &str,
    ) -> Result<String, SessionStoreError>;

    /// Liveness check for the request gate: the presented access token must
    /// still belong to a stored session of that same user.
    async fn access_token_exists(
        &self,
        user_id: &str,
        access_token: &str,
    ) -> Result<bool, SessionStoreError>;
}
