use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::auth::CurrentUser;
use crate::dto::{CreateUserRequest, UpdateUserRequest};
use crate::services;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::{created, empty_success, success};

pub async fn list(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Response, AppError> {
    let users = services::users::list(&state.pool, &current).await?;
    Ok(success(users, "Users fetched successfully").into_response())
}

pub async fn get(
    State(state): State<AppState>,
    _current: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    let user = services::users::get(&state.pool, id).await?;
    Ok(success(user, "User fetched successfully").into_response())
}

pub async fn get_by_email(
    State(state): State<AppState>,
    _current: CurrentUser,
    Path(email): Path<String>,
) -> Result<Response, AppError> {
    let user = services::users::get_by_email(&state.pool, &email).await?;
    Ok(success(user, "User fetched successfully").into_response())
}

pub async fn create(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(request): Json<CreateUserRequest>,
) -> Result<Response, AppError> {
    let user = services::users::create(&state.pool, &current, request).await?;
    Ok(created(user, "User created successfully").into_response())
}

pub async fn update(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i64>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Response, AppError> {
    let user = services::users::update(&state.pool, &current, id, request).await?;
    Ok(success(user, "User updated successfully").into_response())
}

pub async fn remove(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    services::users::delete(&state.pool, &current, id).await?;
    Ok(empty_success("User deleted successfully").into_response())
}
