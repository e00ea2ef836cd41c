use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::auth::CurrentUser;
use crate::dto::BookRequest;
use crate::services;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::{created, success};

pub async fn book(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(request): Json<BookRequest>,
) -> Result<Response, AppError> {
    let booking = services::registrations::book(&state.pool, &current, request).await?;
    Ok(created(booking, "Event booked successfully").into_response())
}

pub async fn my_bookings(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Response, AppError> {
    let bookings = services::registrations::my_bookings(&state.pool, &current).await?;
    Ok(success(bookings, "Bookings fetched successfully").into_response())
}

pub async fn has_booked(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(event_id): Path<i64>,
) -> Result<Response, AppError> {
    let booked = services::registrations::has_booked(&state.pool, &current, event_id).await?;
    Ok(success(booked, "Booking status fetched successfully").into_response())
}

pub async fn invoice(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    let invoice = services::registrations::get_invoice(&state.pool, &current, id).await?;
    Ok(success(invoice, "Invoice fetched successfully").into_response())
}
