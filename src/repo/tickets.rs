use sqlx::{PgConnection, PgExecutor};

use crate::models::ticket::{clamp_remaining, seed_remaining};
use crate::models::{Event, TicketInventory};

pub async fn find_by_event(
    executor: impl PgExecutor<'_>,
    event_id: i64,
) -> Result<Option<TicketInventory>, sqlx::Error> {
    sqlx::query_as::<_, TicketInventory>("SELECT * FROM tickets WHERE event_id = $1")
        .bind(event_id)
        .fetch_optional(executor)
        .await
}

/// Return the event's inventory row, creating it when absent. A fresh row
/// is seeded with capacity minus the registrations that already exist; an
/// existing row is returned untouched.
pub async fn ensure(conn: &mut PgConnection, event: &Event) -> Result<TicketInventory, sqlx::Error> {
    if let Some(inventory) = find_by_event(&mut *conn, event.id).await? {
        return Ok(inventory);
    }

    let capacity = event.max_attendees.unwrap_or(0);
    let booked = super::registrations::count_for_event(&mut *conn, event.id).await? as i32;

    sqlx::query(
        "INSERT INTO tickets (event_id, event_name, max_tickets, tickets_left)
         VALUES ($1, $2, $3, $4)
         ON CONFLICT (event_id) DO NOTHING",
    )
    .bind(event.id)
    .bind(&event.name)
    .bind(capacity)
    .bind(seed_remaining(capacity, booked))
    .execute(&mut *conn)
    .await?;

    find_by_event(&mut *conn, event.id)
        .await?
        .ok_or(sqlx::Error::RowNotFound)
}

/// Claim `quantity` seats. The WHERE guard makes the decrement atomic under
/// concurrent callers; zero rows affected means the claim lost.
pub async fn reserve(
    executor: impl PgExecutor<'_>,
    event_id: i64,
    quantity: i32,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE tickets SET tickets_left = tickets_left - $2
         WHERE event_id = $1 AND tickets_left >= $2",
    )
    .bind(event_id)
    .bind(quantity)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}

/// Bring the ledger in line with an event after create or edit: the new
/// capacity becomes the ceiling and the remaining count is clamped to it.
/// Raising capacity never restores seats already consumed.
pub async fn sync(
    conn: &mut PgConnection,
    event_id: i64,
    event_name: &str,
    capacity: i32,
) -> Result<(), sqlx::Error> {
    match find_by_event(&mut *conn, event_id).await? {
        Some(inventory) => {
            sqlx::query(
                "UPDATE tickets SET event_name = $2, max_tickets = $3, tickets_left = $4
                 WHERE event_id = $1",
            )
            .bind(event_id)
            .bind(event_name)
            .bind(capacity)
            .bind(clamp_remaining(inventory.tickets_left, capacity))
            .execute(&mut *conn)
            .await?;
        }
        None => {
            sqlx::query(
                "INSERT INTO tickets (event_id, event_name, max_tickets, tickets_left)
                 VALUES ($1, $2, $3, $3)
                 ON CONFLICT (event_id) DO NOTHING",
            )
            .bind(event_id)
            .bind(event_name)
            .bind(capacity)
            .execute(&mut *conn)
            .await?;
        }
    }
    Ok(())
}
