use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgPool};

use crate::dto::{EventDetails, EventPayload};
use crate::models::{EventStatus, User, Venue};
use crate::repo;
use crate::services::access::visible_to;
use crate::utils::error::AppError;

/// Inclusive interval overlap: two windows sharing a boundary instant
/// still conflict.
pub fn windows_overlap(
    existing_start: DateTime<Utc>,
    existing_end: DateTime<Utc>,
    new_start: DateTime<Utc>,
    new_end: DateTime<Utc>,
) -> bool {
    existing_start <= new_end && existing_end >= new_start
}

/// Reject the window if any non-cancelled event at the venue overlaps it.
/// `exclude_event` skips the event being edited so it cannot conflict with
/// itself.
async fn check_venue_free(
    conn: &mut PgConnection,
    venue_id: i64,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    exclude_event: Option<i64>,
) -> Result<(), AppError> {
    let existing = repo::events::find_by_venue_non_cancelled(&mut *conn, venue_id).await?;
    let conflict = existing.iter().any(|event| {
        exclude_event != Some(event.id)
            && windows_overlap(event.start_date, event.end_date, start, end)
    });
    if conflict {
        return Err(AppError::VenueConflict);
    }
    Ok(())
}

async fn load_venue(conn: &mut PgConnection, venue_id: i64) -> Result<Venue, AppError> {
    repo::venues::find_by_id(&mut *conn, venue_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Venue not found with id: {venue_id}")))
}

/// Assigning a venue pins the event's location and capacity to it.
fn apply_venue(venue: &Venue, location: &mut Option<String>, max_attendees: &mut Option<i32>) {
    if let Some(display) = venue.display_location() {
        *location = Some(display);
    }
    if let Some(capacity) = venue.capacity {
        *max_attendees = Some(capacity);
    }
}

fn validate_window(payload: &EventPayload) -> Result<(), AppError> {
    if payload.end_date < payload.start_date {
        return Err(AppError::ValidationError(
            "End date must not be before start date".to_string(),
        ));
    }
    Ok(())
}

fn event_not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Event not found with id: {id}"))
}

pub async fn list(
    pool: &PgPool,
    current: &User,
    status: Option<EventStatus>,
    search: Option<&str>,
) -> Result<Vec<EventDetails>, AppError> {
    let events = repo::events::find_all_details(pool, status, search).await?;
    Ok(events
        .into_iter()
        .filter(|e| visible_to(current.role, current.id, e.organizer_id, e.status))
        .collect())
}

pub async fn get(pool: &PgPool, current: &User, id: i64) -> Result<EventDetails, AppError> {
    let event = repo::events::find_details(pool, id)
        .await?
        .ok_or_else(|| event_not_found(id))?;
    // Invisible events read as missing so their existence is not leaked.
    if !visible_to(current.role, current.id, event.organizer_id, event.status) {
        return Err(event_not_found(id));
    }
    Ok(event)
}

pub async fn by_organizer(
    pool: &PgPool,
    current: &User,
    organizer_id: Option<i64>,
) -> Result<Vec<EventDetails>, AppError> {
    let target = organizer_id.unwrap_or(current.id);
    if !current.is_admin() && current.id != target {
        return Err(AppError::Forbidden("Access denied".to_string()));
    }
    Ok(repo::events::find_details_by_organizer(pool, target).await?)
}

pub async fn upcoming(pool: &PgPool, limit: i64) -> Result<Vec<EventDetails>, AppError> {
    Ok(repo::events::find_upcoming_details(pool, Utc::now(), limit.clamp(1, 20)).await?)
}

pub async fn create(
    pool: &PgPool,
    current: &User,
    payload: EventPayload,
) -> Result<EventDetails, AppError> {
    if !current.is_admin() && !current.is_organizer() {
        return Err(AppError::Forbidden(
            "Only organizers can create events".to_string(),
        ));
    }
    validate_window(&payload)?;

    let mut tx = pool.begin().await?;

    let mut location = payload.location.clone();
    let mut max_attendees = payload.max_attendees;
    if let Some(venue_id) = payload.venue_id {
        let venue = load_venue(&mut tx, venue_id).await?;
        apply_venue(&venue, &mut location, &mut max_attendees);
        check_venue_free(&mut tx, venue_id, payload.start_date, payload.end_date, None).await?;
    }

    let new = repo::events::NewEvent {
        name: &payload.name,
        description: payload.description.as_deref(),
        start_date: payload.start_date,
        end_date: payload.end_date,
        location: location.as_deref(),
        status: payload.status.unwrap_or(EventStatus::Draft),
        max_attendees,
        ticket_price: payload.ticket_price,
        venue_id: payload.venue_id,
        organizer_id: current.id,
    };
    let event = repo::events::insert(&mut *tx, &new).await?;
    repo::tickets::sync(&mut tx, event.id, &event.name, event.max_attendees.unwrap_or(0)).await?;
    tx.commit().await?;

    tracing::info!(event_id = event.id, organizer_id = current.id, "Event created");
    repo::events::find_details(pool, event.id)
        .await?
        .ok_or_else(|| AppError::InternalServerError("Event missing after create".to_string()))
}

pub async fn update(
    pool: &PgPool,
    current: &User,
    id: i64,
    payload: EventPayload,
) -> Result<EventDetails, AppError> {
    validate_window(&payload)?;

    let mut tx = pool.begin().await?;

    let event = repo::events::find_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| event_not_found(id))?;
    if !current.is_admin() && event.organizer_id != current.id {
        return Err(AppError::Forbidden(
            "Access denied. You can only update your own events".to_string(),
        ));
    }

    // Location and capacity follow the venue, not the payload: they change
    // only when the venue assignment changes, and capacity is re-pinned to
    // the current venue otherwise.
    let mut location = event.location.clone();
    let mut max_attendees = event.max_attendees;
    let mut venue_id = event.venue_id;
    match payload.venue_id {
        Some(requested) if event.venue_id != Some(requested) => {
            let venue = load_venue(&mut tx, requested).await?;
            apply_venue(&venue, &mut location, &mut max_attendees);
            check_venue_free(
                &mut tx,
                requested,
                payload.start_date,
                payload.end_date,
                Some(id),
            )
            .await?;
            venue_id = Some(requested);
        }
        _ => {
            if let Some(existing) = event.venue_id {
                if let Some(venue) = repo::venues::find_by_id(&mut *tx, existing).await? {
                    if let Some(capacity) = venue.capacity {
                        max_attendees = Some(capacity);
                    }
                }
            }
        }
    }

    let new = repo::events::NewEvent {
        name: &payload.name,
        description: payload.description.as_deref(),
        start_date: payload.start_date,
        end_date: payload.end_date,
        location: location.as_deref(),
        status: payload.status.unwrap_or(event.status),
        max_attendees,
        ticket_price: payload.ticket_price,
        venue_id,
        organizer_id: event.organizer_id,
    };
    let updated = repo::events::update(&mut *tx, id, &new)
        .await?
        .ok_or_else(|| event_not_found(id))?;
    repo::tickets::sync(&mut tx, id, &updated.name, updated.max_attendees.unwrap_or(0)).await?;
    tx.commit().await?;

    repo::events::find_details(pool, id)
        .await?
        .ok_or_else(|| event_not_found(id))
}

pub async fn delete(pool: &PgPool, current: &User, id: i64) -> Result<(), AppError> {
    let event = repo::events::find_by_id(pool, id)
        .await?
        .ok_or_else(|| event_not_found(id))?;
    if !current.is_admin() && event.organizer_id != current.id {
        return Err(AppError::Forbidden(
            "Access denied. You can only delete your own events".to_string(),
        ));
    }
    repo::events::delete(pool, id).await?;
    tracing::info!(event_id = id, "Event deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 9, 1, hour, 0, 0).unwrap()
    }

    #[test]
    fn overlapping_windows_conflict() {
        // existing 11:00-13:00 vs new 10:00-12:00
        assert!(windows_overlap(at(11), at(13), at(10), at(12)));
        // fully contained
        assert!(windows_overlap(at(10), at(13), at(11), at(12)));
    }

    #[test]
    fn shared_boundary_instant_counts_as_overlap() {
        // existing 10:00-12:00 vs new 12:00-13:00
        assert!(windows_overlap(at(10), at(12), at(12), at(13)));
        assert!(windows_overlap(at(12), at(13), at(10), at(12)));
    }

    #[test]
    fn disjoint_windows_do_not_conflict() {
        assert!(!windows_overlap(at(10), at(11), at(12), at(13)));
        assert!(!windows_overlap(at(12), at(13), at(10), at(11)));
    }
}
