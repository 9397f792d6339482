use axum::extract::State;
use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::app_state::AppState;
use crate::domain::{Email, Passport, Password, RegisterRequestBody, UserRole};
use crate::errors::SignupError;

pub async fn signup_customer(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequestBody>,
) -> Result<impl IntoResponse, SignupError> {
    signup(state, request, UserRole::Customer).await
}

pub async fn signup_admin(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequestBody>,
) -> Result<impl IntoResponse, SignupError> {
    signup(state, request, UserRole::Admin).await
}

async fn signup(
    state: AppState,
    request: RegisterRequestBody,
    role: UserRole,
) -> Result<(StatusCode, Json<Passport>), SignupError> {
    let email = Email::parse(request.email).or(Err(SignupError::InvalidEmail))?;
    let password = Password::parse(request.password).or(Err(SignupError::InvalidPassword))?;

    let passport = state
        .passport_service
        .sign_up(email, request.username, password, role)
        .await?;

    Ok((StatusCode::CREATED, Json(passport)))
}
