use sqlx::PgExecutor;

use crate::dto::BookingDetails;
use crate::models::{PaymentStatus, Registration};

const DETAILS_SELECT: &str = "
    SELECT r.id, r.event_id, e.name AS event_name, e.location AS event_location,
           e.start_date AS event_start_date, e.end_date AS event_end_date,
           e.ticket_price, r.number_of_tickets, r.payment_status, r.ticket_code,
           r.registered_at, r.user_id, u.first_name AS user_first_name,
           u.last_name AS user_last_name, u.email AS user_email
    FROM registrations r
    JOIN events e ON e.id = r.event_id
    JOIN users u ON u.id = r.user_id";

pub async fn exists(
    executor: impl PgExecutor<'_>,
    event_id: i64,
    user_id: i64,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM registrations WHERE event_id = $1 AND user_id = $2)",
    )
    .bind(event_id)
    .bind(user_id)
    .fetch_one(executor)
    .await
}

/// Number of registration rows for an event (not the ticket sum); used to
/// seed a lazily created inventory record.
pub async fn count_for_event(
    executor: impl PgExecutor<'_>,
    event_id: i64,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM registrations WHERE event_id = $1")
        .bind(event_id)
        .fetch_one(executor)
        .await
}

pub async fn insert(
    executor: impl PgExecutor<'_>,
    event_id: i64,
    user_id: i64,
    number_of_tickets: i32,
    ticket_code: &str,
    payment_status: PaymentStatus,
) -> Result<Registration, sqlx::Error> {
    sqlx::query_as::<_, Registration>(
        "INSERT INTO registrations (event_id, user_id, number_of_tickets, payment_status, ticket_code)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING *",
    )
    .bind(event_id)
    .bind(user_id)
    .bind(number_of_tickets)
    .bind(payment_status)
    .bind(ticket_code)
    .fetch_one(executor)
    .await
}

pub async fn find_details(
    executor: impl PgExecutor<'_>,
    id: i64,
) -> Result<Option<BookingDetails>, sqlx::Error> {
    sqlx::query_as::<_, BookingDetails>(&format!("{DETAILS_SELECT} WHERE r.id = $1"))
        .bind(id)
        .fetch_optional(executor)
        .await
}

pub async fn find_details_by_user(
    executor: impl PgExecutor<'_>,
    user_id: i64,
) -> Result<Vec<BookingDetails>, sqlx::Error> {
    sqlx::query_as::<_, BookingDetails>(&format!(
        "{DETAILS_SELECT} WHERE r.user_id = $1 ORDER BY r.registered_at DESC"
    ))
    .bind(user_id)
    .fetch_all(executor)
    .await
}
