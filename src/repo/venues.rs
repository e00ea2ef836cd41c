use sqlx::PgExecutor;

use crate::dto::VenuePayload;
use crate::models::Venue;

pub async fn find_all(executor: impl PgExecutor<'_>) -> Result<Vec<Venue>, sqlx::Error> {
    sqlx::query_as::<_, Venue>("SELECT * FROM venues ORDER BY id")
        .fetch_all(executor)
        .await
}

pub async fn find_active(executor: impl PgExecutor<'_>) -> Result<Vec<Venue>, sqlx::Error> {
    sqlx::query_as::<_, Venue>("SELECT * FROM venues WHERE is_active ORDER BY id")
        .fetch_all(executor)
        .await
}

pub async fn find_by_id(
    executor: impl PgExecutor<'_>,
    id: i64,
) -> Result<Option<Venue>, sqlx::Error> {
    sqlx::query_as::<_, Venue>("SELECT * FROM venues WHERE id = $1")
        .bind(id)
        .fetch_optional(executor)
        .await
}

pub async fn insert(
    executor: impl PgExecutor<'_>,
    payload: &VenuePayload,
    created_by: i64,
) -> Result<Venue, sqlx::Error> {
    sqlx::query_as::<_, Venue>(
        "INSERT INTO venues (name, address, city, state, zip_code, capacity, amenities, is_active, created_by)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
         RETURNING *",
    )
    .bind(&payload.name)
    .bind(&payload.address)
    .bind(&payload.city)
    .bind(&payload.state)
    .bind(&payload.zip_code)
    .bind(payload.capacity)
    .bind(&payload.amenities)
    .bind(payload.is_active.unwrap_or(true))
    .bind(created_by)
    .fetch_one(executor)
    .await
}

pub async fn update(
    executor: impl PgExecutor<'_>,
    id: i64,
    payload: &VenuePayload,
) -> Result<Option<Venue>, sqlx::Error> {
    sqlx::query_as::<_, Venue>(
        "UPDATE venues
         SET name = $2, address = $3, city = $4, state = $5, zip_code = $6,
             capacity = $7, amenities = $8, is_active = $9
         WHERE id = $1
         RETURNING *",
    )
    .bind(id)
    .bind(&payload.name)
    .bind(&payload.address)
    .bind(&payload.city)
    .bind(&payload.state)
    .bind(&payload.zip_code)
    .bind(payload.capacity)
    .bind(&payload.amenities)
    .bind(payload.is_active.unwrap_or(true))
    .fetch_optional(executor)
    .await
}

pub async fn delete(executor: impl PgExecutor<'_>, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM venues WHERE id = $1")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}

pub async fn count(executor: impl PgExecutor<'_>) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM venues")
        .fetch_one(executor)
        .await
}
