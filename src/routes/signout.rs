use axum::extract::State;
use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::app_state::AppState;
use crate::domain::{SignOutRequestBody, SignOutResponse};
use crate::errors::SignoutError;

pub async fn signout(
    State(state): State<AppState>,
    Json(request): Json<SignOutRequestBody>,
) -> Result<impl IntoResponse, SignoutError> {
    state.passport_service.sign_out(&request.session_id).await?;

    Ok((
        StatusCode::OK,
        Json(SignOutResponse {
            message: "Signed out successfully".to_string(),
        }),
    ))
}
