use serde::Serialize;

use super::user::UserView;

/// Session handle handed to the client on sign-in and refresh. `id` is the
/// persisted session record id; clients present it on sign-out.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TokenPair {
    pub id: String,
    pub access_token: String,
    pub refresh_token: String,
}

/// Registration responds with `token: None`; issuing a session is an explicit
/// sign-in step.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Passport {
    pub user: UserView,
    pub token: Option<TokenPair>,
}
