/// Signing and verification of the four token kinds.
///
/// Every kind is an HS256 JWT carrying `TokenClaims`, but each kind signs
/// under its own secret, so a token only ever verifies as the kind it was
/// minted as. TTLs:
/// - access / admin: short (`ACCESS_TTL_SECONDS`)
/// - refresh: long (`REFRESH_TTL_SECONDS`)
/// - api-key: fixed multi-year constant
///
/// The codec holds configuration and nothing else; all session state lives in
/// the `SessionStore`.
use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::{TokenClaims, TokenKind};
use crate::utils::consts::API_KEY_TTL_SECONDS;
use crate::utils::Config;

#[derive(Debug, PartialEq)]
pub enum TokenError {
    Malformed,
    InvalidSignature,
    Expired,
}

#[derive(Clone)]
pub struct TokenCodec {
    config: Arc<Config>,
}

impl TokenCodec {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    fn secret(&self, kind: TokenKind) -> &str {
        match kind {
            TokenKind::Access => self.config.access_secret(),
            TokenKind::Refresh => self.config.refresh_secret(),
            TokenKind::Admin => self.config.admin_secret(),
            TokenKind::ApiKey => self.config.api_key_secret(),
        }
    }

    fn ttl_seconds(&self, kind: TokenKind) -> i64 {
        match kind {
            TokenKind::Access => self.config.access_ttl_seconds(),
            TokenKind::Refresh => self.config.refresh_ttl_seconds(),
            // Admin tokens ride the access window; they are handed out for
            // immediate system use, not stored.
            TokenKind::Admin => self.config.access_ttl_seconds(),
            TokenKind::ApiKey => API_KEY_TTL_SECONDS,
        }
    }

    pub fn sign(
        &self,
        kind: TokenKind,
        sub: &str,
        role_id: i32,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.ttl_seconds(kind));

        let claims = TokenClaims {
            sub: sub.to_string(),
            role_id,
            iat: now.timestamp() as usize,
            exp: exp.timestamp() as usize,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret(kind).as_bytes()),
        )
    }

    /// Admin and api-key tokens are system-level: no subject, no role.
    pub fn sign_system(&self, kind: TokenKind) -> Result<String, jsonwebtoken::errors::Error> {
        self.sign(kind, "", 0)
    }

    pub fn verify(&self, kind: TokenKind, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is exact; a token is dead the moment exp passes.
        validation.leeway = 0;

        decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(self.secret(kind).as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(map_decode_err)
    }
}

fn map_decode_err(e: jsonwebtoken::errors::Error) -> TokenError {
    use jsonwebtoken::errors::ErrorKind;

    match e.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::InvalidSignature
        | ErrorKind::ImmatureSignature
        | ErrorKind::InvalidAlgorithm
        | ErrorKind::InvalidAlgorithmName => TokenError::InvalidSignature,
        _ => TokenError::Malformed,
    }
}

/// Gate for machine-to-machine callers, independent of user sessions.
#[derive(Clone)]
pub struct ApiKeyValidator {
    codec: TokenCodec,
}

impl ApiKeyValidator {
    pub fn new(codec: TokenCodec) -> Self {
        Self { codec }
    }

    pub fn validate(&self, key: &str) -> Result<(), TokenError> {
        self.codec.verify(TokenKind::ApiKey, key).map(|_| ())
    }
}
