use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdminTokenError {
    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl IntoResponse for AdminTokenError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            AdminTokenError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
