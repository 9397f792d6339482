use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SigninError {
    // One variant for unknown user and wrong password; responses must not
    // reveal which identifying fields exist.
    #[error("email, username or password is invalid")]
    InvalidCredentials,

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl IntoResponse for SigninError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            SigninError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            SigninError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
