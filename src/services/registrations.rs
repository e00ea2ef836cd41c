use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::{BookRequest, BookingDetails, InvoiceView};
use crate::models::{Event, EventStatus, PaymentStatus, User, UserRole};
use crate::repo;
use crate::services::invoice;
use crate::utils::error::AppError;

/// Eligibility that does not depend on inventory: the event must be
/// published and must not have started yet.
fn check_event_open(event: &Event, now: DateTime<Utc>) -> Result<(), AppError> {
    if event.status != EventStatus::Published {
        return Err(AppError::NotBookable);
    }
    if event.start_date <= now {
        return Err(AppError::EventStarted);
    }
    Ok(())
}

/// Human-readable ticket code: `EVT-{event}-{token}`. The token is drawn
/// from a v4 UUID, unique with overwhelming probability; collisions are not
/// retried.
fn ticket_code(event_id: i64) -> String {
    let token = Uuid::new_v4().simple().to_string()[..8].to_uppercase();
    format!("EVT-{event_id}-{token}")
}

pub async fn book(
    pool: &PgPool,
    current: &User,
    request: BookRequest,
) -> Result<BookingDetails, AppError> {
    if request.number_of_tickets < 1 {
        return Err(AppError::ValidationError(
            "At least 1 ticket required".to_string(),
        ));
    }
    if current.role != UserRole::Attendee && current.role != UserRole::Admin {
        return Err(AppError::Forbidden(
            "Only attendees can book events".to_string(),
        ));
    }

    // Reservation and registration share one transaction so a failed insert
    // cannot leave seats consumed without a matching booking.
    let mut tx = pool.begin().await?;

    let event = repo::events::find_by_id(&mut *tx, request.event_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;
    check_event_open(&event, Utc::now())?;

    if repo::registrations::exists(&mut *tx, event.id, current.id).await? {
        return Err(AppError::AlreadyBooked);
    }

    let inventory = repo::tickets::ensure(&mut tx, &event).await?;
    if inventory.tickets_left < request.number_of_tickets {
        return Err(AppError::InsufficientInventory {
            remaining: inventory.tickets_left,
        });
    }

    // The guarded decrement is the authoritative check; the pre-check above
    // only exists to surface the remaining count early.
    if repo::tickets::reserve(&mut *tx, event.id, request.number_of_tickets).await? == 0 {
        return Err(AppError::BookingFailed);
    }

    let registration = repo::registrations::insert(
        &mut *tx,
        event.id,
        current.id,
        request.number_of_tickets,
        &ticket_code(event.id),
        PaymentStatus::Completed,
    )
    .await?;
    let booking = repo::registrations::find_details(&mut *tx, registration.id)
        .await?
        .ok_or_else(|| {
            AppError::InternalServerError("Booking missing after insert".to_string())
        })?;

    tx.commit().await?;

    tracing::info!(
        event_id = event.id,
        user_id = current.id,
        tickets = request.number_of_tickets,
        "Booking confirmed"
    );
    Ok(booking)
}

pub async fn my_bookings(pool: &PgPool, current: &User) -> Result<Vec<BookingDetails>, AppError> {
    Ok(repo::registrations::find_details_by_user(pool, current.id).await?)
}

pub async fn has_booked(pool: &PgPool, current: &User, event_id: i64) -> Result<bool, AppError> {
    Ok(repo::registrations::exists(pool, event_id, current.id).await?)
}

pub async fn get_invoice(
    pool: &PgPool,
    current: &User,
    registration_id: i64,
) -> Result<InvoiceView, AppError> {
    let booking = repo::registrations::find_details(pool, registration_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;
    if booking.user_id != current.id {
        return Err(AppError::Forbidden("Access denied".to_string()));
    }
    Ok(invoice::project(&booking))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn event(status: EventStatus, start_hour: u32) -> Event {
        let start = Utc.with_ymd_and_hms(2026, 9, 1, start_hour, 0, 0).unwrap();
        Event {
            id: 42,
            name: "RustConf".to_string(),
            description: None,
            start_date: start,
            end_date: start + chrono::Duration::hours(8),
            location: None,
            status,
            max_attendees: Some(100),
            ticket_price: None,
            venue_id: None,
            organizer_id: 1,
            created_at: start,
            updated_at: start,
        }
    }

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn unpublished_events_are_not_bookable() {
        for status in [
            EventStatus::Draft,
            EventStatus::Cancelled,
            EventStatus::Completed,
        ] {
            assert!(matches!(
                check_event_open(&event(status, 18), noon()),
                Err(AppError::NotBookable)
            ));
        }
    }

    #[test]
    fn started_events_are_rejected() {
        assert!(matches!(
            check_event_open(&event(EventStatus::Published, 9), noon()),
            Err(AppError::EventStarted)
        ));
        // Start exactly now is no longer strictly in the future.
        assert!(matches!(
            check_event_open(&event(EventStatus::Published, 12), noon()),
            Err(AppError::EventStarted)
        ));
    }

    #[test]
    fn future_published_events_are_open() {
        assert!(check_event_open(&event(EventStatus::Published, 18), noon()).is_ok());
    }

    #[test]
    fn ticket_codes_carry_event_id_and_token() {
        let code = ticket_code(42);
        let token = code.strip_prefix("EVT-42-").expect("prefix should match");
        assert_eq!(token.len(), 8);
        assert!(token
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn ticket_codes_differ_between_calls() {
        assert_ne!(ticket_code(1), ticket_code(1));
    }
}
