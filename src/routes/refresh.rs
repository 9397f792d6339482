use axum::extract::State;
use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::app_state::AppState;
use crate::domain::RefreshRequestBody;
use crate::errors::RefreshError;

pub async fn refresh_passport(
    State(state): State<AppState>,
    Json(request): Json<RefreshRequestBody>,
) -> Result<impl IntoResponse, RefreshError> {
    let passport = state
        .passport_service
        .refresh_passport(&request.refresh_token)
        .await?;

    Ok((StatusCode::OK, Json(passport)))
}
