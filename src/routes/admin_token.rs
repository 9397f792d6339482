use axum::extract::State;
use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::app_state::AppState;
use crate::domain::AdminTokenResponse;
use crate::errors::AdminTokenError;

pub async fn generate_admin_token(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AdminTokenError> {
    let token = state.passport_service.generate_admin_token()?;

    Ok((StatusCode::OK, Json(AdminTokenResponse { token })))
}
