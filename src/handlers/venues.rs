use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::auth::CurrentUser;
use crate::dto::{VenueListQuery, VenuePayload};
use crate::services;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::{created, empty_success, success};

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<VenueListQuery>,
) -> Result<Response, AppError> {
    let venues = services::venues::list(&state.pool, query.active.unwrap_or(false)).await?;
    Ok(success(venues, "Venues fetched successfully").into_response())
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    let venue = services::venues::get(&state.pool, id).await?;
    Ok(success(venue, "Venue fetched successfully").into_response())
}

pub async fn create(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(payload): Json<VenuePayload>,
) -> Result<Response, AppError> {
    let venue = services::venues::create(&state.pool, &current, payload).await?;
    Ok(created(venue, "Venue created successfully").into_response())
}

pub async fn update(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<VenuePayload>,
) -> Result<Response, AppError> {
    let venue = services::venues::update(&state.pool, &current, id, payload).await?;
    Ok(success(venue, "Venue updated successfully").into_response())
}

pub async fn remove(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    services::venues::delete(&state.pool, &current, id).await?;
    Ok(empty_success("Venue deleted successfully").into_response())
}
