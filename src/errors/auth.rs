use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

/// Failures raised by the request-gate middlewares.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("authorization token is required")]
    MissingToken,

    #[error("access token is invalid")]
    InvalidToken,

    #[error("access token is expired")]
    TokenExpired,

    // Token verified but its session row is gone: signed out or rotated away.
    #[error("no permission to access")]
    SessionRevoked,

    #[error("no permission to access")]
    Forbidden,

    #[error("params mismatch")]
    ParamsMismatch,

    #[error("apikey is invalid or required")]
    InvalidApiKey,

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            AuthError::MissingToken => StatusCode::UNAUTHORIZED,
            AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
            AuthError::TokenExpired => StatusCode::UNAUTHORIZED,
            AuthError::SessionRevoked => StatusCode::UNAUTHORIZED,
            AuthError::Forbidden => StatusCode::FORBIDDEN,
            AuthError::ParamsMismatch => StatusCode::FORBIDDEN,
            AuthError::InvalidApiKey => StatusCode::UNAUTHORIZED,
            AuthError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
