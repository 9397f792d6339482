use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RefreshError {
    #[error("refresh token is invalid")]
    InvalidToken,

    #[error("refresh token is expired")]
    Expired,

    #[error("session was not found")]
    SessionNotFound,

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl IntoResponse for RefreshError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            RefreshError::InvalidToken => StatusCode::UNAUTHORIZED,
            RefreshError::Expired => StatusCode::UNAUTHORIZED,
            RefreshError::SessionNotFound => StatusCode::UNAUTHORIZED,
            RefreshError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
