use serde::{Deserialize, Serialize};

/// Discriminates which secret and TTL a token is signed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
    Admin,
    ApiKey,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenClaims {
    pub sub: String, // Subject (user ID); empty for admin/api-key tokens
    pub role_id: i32,
    pub iat: usize, // Issued at time
    pub exp: usize, // Expiration time
}
