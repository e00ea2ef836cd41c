use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::auth::CurrentUser;
use crate::dto::{EventListQuery, EventPayload, UpcomingQuery};
use crate::services;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::{created, empty_success, success};

pub async fn list(
    State(state): State<AppState>,
    current: CurrentUser,
    Query(query): Query<EventListQuery>,
) -> Result<Response, AppError> {
    let search = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());
    let events = services::events::list(&state.pool, &current, query.status, search).await?;
    Ok(success(events, "Events fetched successfully").into_response())
}

pub async fn upcoming(
    State(state): State<AppState>,
    Query(query): Query<UpcomingQuery>,
) -> Result<Response, AppError> {
    let events = services::events::upcoming(&state.pool, query.limit.unwrap_or(5)).await?;
    Ok(success(events, "Upcoming events fetched successfully").into_response())
}

pub async fn my_events(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Response, AppError> {
    let events = services::events::by_organizer(&state.pool, &current, None).await?;
    Ok(success(events, "Events fetched successfully").into_response())
}

pub async fn get(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    let event = services::events::get(&state.pool, &current, id).await?;
    Ok(success(event, "Event fetched successfully").into_response())
}

pub async fn create(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(payload): Json<EventPayload>,
) -> Result<Response, AppError> {
    let event = services::events::create(&state.pool, &current, payload).await?;
    Ok(created(event, "Event created successfully").into_response())
}

pub async fn update(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<EventPayload>,
) -> Result<Response, AppError> {
    let event = services::events::update(&state.pool, &current, id, payload).await?;
    Ok(success(event, "Event updated successfully").into_response())
}

pub async fn remove(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    services::events::delete(&state.pool, &current, id).await?;
    Ok(empty_success("Event deleted successfully").into_response())
}
