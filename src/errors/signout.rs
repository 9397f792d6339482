use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignoutError {
    #[error("session was not found")]
    SessionNotFound,

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl IntoResponse for SignoutError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            SignoutError::SessionNotFound => StatusCode::BAD_REQUEST,
            SignoutError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
