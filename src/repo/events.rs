use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgExecutor;

use crate::dto::EventDetails;
use crate::models::{Event, EventStatus};

/// Field set shared by event insert and update.
pub struct NewEvent<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location: Option<&'a str>,
    pub status: EventStatus,
    pub max_attendees: Option<i32>,
    pub ticket_price: Option<Decimal>,
    pub venue_id: Option<i64>,
    pub organizer_id: i64,
}

const DETAILS_SELECT: &str = "
    SELECT e.id, e.name, e.description, e.start_date, e.end_date, e.location,
           e.status, e.max_attendees, t.tickets_left, e.ticket_price,
           e.venue_id, v.name AS venue_name, e.organizer_id,
           u.first_name || ' ' || u.last_name AS organizer_name,
           e.created_at, e.updated_at
    FROM events e
    JOIN users u ON u.id = e.organizer_id
    LEFT JOIN venues v ON v.id = e.venue_id
    LEFT JOIN tickets t ON t.event_id = e.id";

pub async fn find_by_id(
    executor: impl PgExecutor<'_>,
    id: i64,
) -> Result<Option<Event>, sqlx::Error> {
    sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
        .bind(id)
        .fetch_optional(executor)
        .await
}

pub async fn find_details(
    executor: impl PgExecutor<'_>,
    id: i64,
) -> Result<Option<EventDetails>, sqlx::Error> {
    sqlx::query_as::<_, EventDetails>(&format!("{DETAILS_SELECT} WHERE e.id = $1"))
        .bind(id)
        .fetch_optional(executor)
        .await
}

/// All events, optionally narrowed by status and by case-insensitive name
/// search. Visibility filtering happens in the service layer.
pub async fn find_all_details(
    executor: impl PgExecutor<'_>,
    status: Option<EventStatus>,
    search: Option<&str>,
) -> Result<Vec<EventDetails>, sqlx::Error> {
    sqlx::query_as::<_, EventDetails>(&format!(
        "{DETAILS_SELECT}
         WHERE ($1::event_status IS NULL OR e.status = $1)
           AND ($2::TEXT IS NULL OR e.name ILIKE '%' || $2 || '%')
         ORDER BY e.start_date"
    ))
    .bind(status)
    .bind(search)
    .fetch_all(executor)
    .await
}

pub async fn find_details_by_organizer(
    executor: impl PgExecutor<'_>,
    organizer_id: i64,
) -> Result<Vec<EventDetails>, sqlx::Error> {
    sqlx::query_as::<_, EventDetails>(&format!(
        "{DETAILS_SELECT} WHERE e.organizer_id = $1 ORDER BY e.start_date"
    ))
    .bind(organizer_id)
    .fetch_all(executor)
    .await
}

pub async fn find_upcoming_details(
    executor: impl PgExecutor<'_>,
    from: DateTime<Utc>,
    limit: i64,
) -> Result<Vec<EventDetails>, sqlx::Error> {
    sqlx::query_as::<_, EventDetails>(&format!(
        "{DETAILS_SELECT}
         WHERE e.status = 'PUBLISHED' AND e.start_date >= $1
         ORDER BY e.start_date ASC
         LIMIT $2"
    ))
    .bind(from)
    .bind(limit)
    .fetch_all(executor)
    .await
}

/// Events that could conflict with a new booking of this venue's calendar.
pub async fn find_by_venue_non_cancelled(
    executor: impl PgExecutor<'_>,
    venue_id: i64,
) -> Result<Vec<Event>, sqlx::Error> {
    sqlx::query_as::<_, Event>(
        "SELECT * FROM events WHERE venue_id = $1 AND status != 'CANCELLED'",
    )
    .bind(venue_id)
    .fetch_all(executor)
    .await
}

pub async fn insert(
    executor: impl PgExecutor<'_>,
    new: &NewEvent<'_>,
) -> Result<Event, sqlx::Error> {
    sqlx::query_as::<_, Event>(
        "INSERT INTO events (name, description, start_date, end_date, location, status,
                             max_attendees, ticket_price, venue_id, organizer_id)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
         RETURNING *",
    )
    .bind(new.name)
    .bind(new.description)
    .bind(new.start_date)
    .bind(new.end_date)
    .bind(new.location)
    .bind(new.status)
    .bind(new.max_attendees)
    .bind(new.ticket_price)
    .bind(new.venue_id)
    .bind(new.organizer_id)
    .fetch_one(executor)
    .await
}

pub async fn update(
    executor: impl PgExecutor<'_>,
    id: i64,
    new: &NewEvent<'_>,
) -> Result<Option<Event>, sqlx::Error> {
    sqlx::query_as::<_, Event>(
        "UPDATE events
         SET name = $2, description = $3, start_date = $4, end_date = $5,
             location = $6, status = $7, max_attendees = $8, ticket_price = $9,
             venue_id = $10, updated_at = now()
         WHERE id = $1
         RETURNING *",
    )
    .bind(id)
    .bind(new.name)
    .bind(new.description)
    .bind(new.start_date)
    .bind(new.end_date)
    .bind(new.location)
    .bind(new.status)
    .bind(new.max_attendees)
    .bind(new.ticket_price)
    .bind(new.venue_id)
    .fetch_optional(executor)
    .await
}

/// Registrations and the inventory row go with the event via FK cascade.
pub async fn delete(executor: impl PgExecutor<'_>, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM events WHERE id = $1")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}

pub async fn count(executor: impl PgExecutor<'_>) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM events")
        .fetch_one(executor)
        .await
}

pub async fn count_by_status(
    executor: impl PgExecutor<'_>,
    status: EventStatus,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM events WHERE status = $1")
        .bind(status)
        .fetch_one(executor)
        .await
}
