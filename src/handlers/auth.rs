use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::dto::{LoginRequest, RegisterRequest};
use crate::services;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::{created, success};

pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Response, AppError> {
    let response = services::auth::register(&state.pool, &state.config, request).await?;
    Ok(created(response, "User registered successfully").into_response())
}

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Response, AppError> {
    let response = services::auth::login(&state.pool, &state.config, request).await?;
    Ok(success(response, "Login successful").into_response())
}
