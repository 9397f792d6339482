use axum::extract::{Path, State};
use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::app_state::AppState;
use crate::errors::ProfileError;

pub async fn get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, ProfileError> {
    let user = state.passport_service.get_profile(user_id.trim()).await?;

    Ok((StatusCode::OK, Json(user)))
}
