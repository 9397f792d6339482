use axum::extract::State;
use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::app_state::AppState;
use crate::domain::{Password, SignInRequestBody};
use crate::errors::SigninError;

pub async fn signin(
    State(state): State<AppState>,
    Json(request): Json<SignInRequestBody>,
) -> Result<impl IntoResponse, SigninError> {
    // An empty password can never match a stored hash.
    let password =
        Password::parse(request.password).or(Err(SigninError::InvalidCredentials))?;

    let passport = state
        .passport_service
        .sign_in(&request.email_or_username, password)
        .await?;

    Ok((StatusCode::OK, Json(passport)))
}
