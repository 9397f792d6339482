/// Request gates applied per-route: bearer-token authentication, path-param
/// ownership, role authorization and api-key auth.
///
/// `jwt_auth` must sit outermost; the other gates read the `AuthContext` it
/// attaches to the request.
use axum::{
    extract::{RawPathParams, Request, State},
    http::header::AUTHORIZATION,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use tracing::error;

use crate::app_state::AppState;
use crate::domain::TokenKind;
use crate::errors::AuthError;
use crate::services::authorizer::authorize;
use crate::services::token_codec::TokenError;
use crate::utils::consts::{API_KEY_HEADER, BEARER_PREFIX};

/// Authenticated caller identity, attached to the request by `jwt_auth`.
#[derive(Clone, Debug)]
pub struct AuthContext {
    pub user_id: String,
    pub role_id: i32,
}

pub async fn jwt_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = bearer_token(req.headers())
        .ok_or(AuthError::MissingToken)?
        .to_owned();

    let claims = state
        .token_codec
        .verify(TokenKind::Access, &token)
        .map_err(|e| match e {
            TokenError::Expired => AuthError::TokenExpired,
            _ => AuthError::InvalidToken,
        })?;

    // A valid signature is not enough: the parent session must still exist.
    let live = state
        .session_store
        .access_token_exists(&claims.sub, &token)
        .await
        .map_err(|e| {
            error!("session liveness check failed: {:?}", e);
            AuthError::InternalServerError
        })?;
    if !live {
        return Err(AuthError::SessionRevoked);
    }

    req.extensions_mut().insert(AuthContext {
        user_id: claims.sub,
        role_id: claims.role_id,
    });
    Ok(next.run(req).await)
}

/// Denies requests whose `user_id` path segment is not the authenticated
/// subject, independent of role.
pub async fn params_check(
    params: RawPathParams,
    req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let ctx = req
        .extensions()
        .get::<AuthContext>()
        .ok_or(AuthError::MissingToken)?;

    let user_id = params
        .iter()
        .find(|(name, _)| *name == "user_id")
        .map(|(_, value)| value)
        .ok_or(AuthError::ParamsMismatch)?;

    if user_id != ctx.user_id {
        return Err(AuthError::ParamsMismatch);
    }
    Ok(next.run(req).await)
}

/// Role gate state: which role ids may pass.
#[derive(Clone)]
pub struct RoleGate {
    state: AppState,
    allowed: Vec<i32>,
}

impl RoleGate {
    pub fn new(state: AppState, allowed: Vec<i32>) -> Self {
        Self { state, allowed }
    }
}

pub async fn role_authorize(
    State(gate): State<RoleGate>,
    req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let ctx = req
        .extensions()
        .get::<AuthContext>()
        .ok_or(AuthError::MissingToken)?;

    // The mask width follows the live role set, not a compiled-in constant.
    let total_roles = gate
        .state
        .user_store
        .count_distinct_roles()
        .await
        .map_err(|e| {
            error!("role count failed: {:?}", e);
            AuthError::InternalServerError
        })?;

    if !authorize(ctx.role_id, &gate.allowed, total_roles) {
        return Err(AuthError::Forbidden);
    }
    Ok(next.run(req).await)
}

pub async fn api_key_auth(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let key = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::InvalidApiKey)?;

    state
        .api_key_validator
        .validate(key)
        .map_err(|_| AuthError::InvalidApiKey)?;
    Ok(next.run(req).await)
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix(BEARER_PREFIX)
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderMap;

    use super::*;

    #[test]
    fn extracts_bearer_token() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Bearer abc.def.ghi".parse().unwrap());
        assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn rejects_missing_or_unprefixed_header() {
        let headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Basic abc".parse().unwrap());
        assert_eq!(bearer_token(&headers), None);
    }
}
