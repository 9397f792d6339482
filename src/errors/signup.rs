use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignupError {
    #[error("email pattern is invalid")]
    InvalidEmail,

    #[error("password must not be empty")]
    InvalidPassword,

    #[error("user {0} already exists")]
    UserAlreadyExists(String),

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl IntoResponse for SignupError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            SignupError::InvalidEmail => StatusCode::BAD_REQUEST,
            SignupError::InvalidPassword => StatusCode::BAD_REQUEST,
            SignupError::UserAlreadyExists(_) => StatusCode::CONFLICT,
            SignupError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
