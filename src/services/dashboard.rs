use sqlx::PgPool;

use crate::dto::DashboardStats;
use crate::models::EventStatus;
use crate::repo;
use crate::utils::error::AppError;

pub async fn stats(pool: &PgPool) -> Result<DashboardStats, AppError> {
    Ok(DashboardStats {
        event_count: repo::events::count(pool).await?,
        venue_count: repo::venues::count(pool).await?,
        user_count: repo::users::count(pool).await?,
        published_event_count: repo::events::count_by_status(pool, EventStatus::Published).await?,
    })
}
