use sqlx::PgPool;

use crate::dto::VenuePayload;
use crate::models::{User, Venue};
use crate::repo;
use crate::utils::error::AppError;

fn require_admin(current: &User, action: &str) -> Result<(), AppError> {
    if !current.is_admin() {
        return Err(AppError::Forbidden(format!(
            "Only administrators can {action} venues"
        )));
    }
    Ok(())
}

fn venue_not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Venue not found with id: {id}"))
}

pub async fn list(pool: &PgPool, active_only: bool) -> Result<Vec<Venue>, AppError> {
    let venues = if active_only {
        repo::venues::find_active(pool).await?
    } else {
        repo::venues::find_all(pool).await?
    };
    Ok(venues)
}

pub async fn get(pool: &PgPool, id: i64) -> Result<Venue, AppError> {
    repo::venues::find_by_id(pool, id)
        .await?
        .ok_or_else(|| venue_not_found(id))
}

pub async fn create(
    pool: &PgPool,
    current: &User,
    payload: VenuePayload,
) -> Result<Venue, AppError> {
    require_admin(current, "create")?;
    let venue = repo::venues::insert(pool, &payload, current.id).await?;
    tracing::info!(venue_id = venue.id, "Venue created");
    Ok(venue)
}

pub async fn update(
    pool: &PgPool,
    current: &User,
    id: i64,
    payload: VenuePayload,
) -> Result<Venue, AppError> {
    require_admin(current, "update")?;
    repo::venues::update(pool, id, &payload)
        .await?
        .ok_or_else(|| venue_not_found(id))
}

pub async fn delete(pool: &PgPool, current: &User, id: i64) -> Result<(), AppError> {
    require_admin(current, "delete")?;
    if repo::venues::delete(pool, id).await? == 0 {
        return Err(venue_not_found(id));
    }
    tracing::info!(venue_id = id, "Venue deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRole;
    use chrono::Utc;

    fn user(role: UserRole) -> User {
        User {
            id: 1,
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace@example.com".to_string(),
            password_hash: None,
            phone: None,
            role,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn only_admins_pass_the_gate() {
        assert!(require_admin(&user(UserRole::Admin), "create").is_ok());
        assert!(matches!(
            require_admin(&user(UserRole::Organizer), "create"),
            Err(AppError::Forbidden(_))
        ));
        assert!(matches!(
            require_admin(&user(UserRole::Attendee), "delete"),
            Err(AppError::Forbidden(_))
        ));
    }
}
