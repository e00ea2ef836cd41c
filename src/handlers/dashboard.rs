use axum::extract::State;
use axum::response::{IntoResponse, Response};

use crate::auth::CurrentUser;
use crate::services;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::success;

pub async fn stats(
    State(state): State<AppState>,
    _current: CurrentUser,
) -> Result<Response, AppError> {
    let stats = services::dashboard::stats(&state.pool).await?;
    Ok(success(stats, "Dashboard stats fetched successfully").into_response())
}
