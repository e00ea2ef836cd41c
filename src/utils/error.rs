use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use crate::utils::response::error as error_response;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Event is not available for booking")]
    NotBookable,

    #[error("Event has already started")]
    EventStarted,

    #[error("You have already booked this event")]
    AlreadyBooked,

    #[error("Not enough tickets available. Only {remaining} left.")]
    InsufficientInventory { remaining: i32 },

    #[error("Not enough tickets available. Booking failed.")]
    BookingFailed,

    #[error("Venue is already booked for this time period")]
    VenueConflict,

    #[error("Database error")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::AuthError(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::NotBookable
            | AppError::EventStarted
            | AppError::AlreadyBooked
            | AppError::InsufficientInventory { .. }
            | AppError::BookingFailed
            | AppError::VenueConflict => StatusCode::CONFLICT,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::AuthError(_) => "AUTH_ERROR",
            AppError::Forbidden(_) => "FORBIDDEN",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::NotBookable => "NOT_BOOKABLE",
            AppError::EventStarted => "EVENT_STARTED",
            AppError::AlreadyBooked => "ALREADY_BOOKED",
            AppError::InsufficientInventory { .. } => "INSUFFICIENT_INVENTORY",
            AppError::BookingFailed => "BOOKING_FAILED",
            AppError::VenueConflict => "VENUE_CONFLICT",
            AppError::DatabaseError(_) => "DATABASE_ERROR",
            AppError::InternalServerError(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    fn log(&self) {
        match self {
            AppError::DatabaseError(e) => {
                error!(error = ?e, "Database error");
            }
            other => {
                error!(code = other.code(), message = %other, "Request rejected");
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        // Log internal details
        self.log();

        // Only expose high-level message to the client
        let public_message = match &self {
            AppError::DatabaseError(_) => "A database error occurred".to_string(),
            other => other.to_string(),
        };

        error_response(code, public_message, None, status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_rejections_map_to_conflict() {
        for err in [
            AppError::NotBookable,
            AppError::EventStarted,
            AppError::AlreadyBooked,
            AppError::InsufficientInventory { remaining: 2 },
            AppError::BookingFailed,
            AppError::VenueConflict,
        ] {
            assert_eq!(err.status_code(), StatusCode::CONFLICT);
        }
    }

    #[test]
    fn access_errors_keep_their_status() {
        assert_eq!(
            AppError::AuthError("Unauthorized".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::Forbidden("nope".into()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::NotFound("missing".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::ValidationError("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn insufficient_inventory_surfaces_remaining_count() {
        let err = AppError::InsufficientInventory { remaining: 3 };
        assert_eq!(err.code(), "INSUFFICIENT_INVENTORY");
        assert_eq!(err.to_string(), "Not enough tickets available. Only 3 left.");
    }
}
