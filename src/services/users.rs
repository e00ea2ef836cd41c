use sqlx::PgPool;

use crate::auth::password;
use crate::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::models::{User, UserRole};
use crate::repo;
use crate::utils::error::AppError;

fn require_admin(current: &User, action: &str) -> Result<(), AppError> {
    if !current.is_admin() {
        return Err(AppError::Forbidden(format!(
            "Access denied. Only administrators can {action} users"
        )));
    }
    Ok(())
}

fn user_not_found(id: i64) -> AppError {
    AppError::NotFound(format!("User not found with id: {id}"))
}

pub async fn list(pool: &PgPool, current: &User) -> Result<Vec<UserResponse>, AppError> {
    require_admin(current, "view all")?;
    let users = repo::users::find_all(pool).await?;
    Ok(users.into_iter().map(UserResponse::from).collect())
}

pub async fn get(pool: &PgPool, id: i64) -> Result<UserResponse, AppError> {
    repo::users::find_by_id(pool, id)
        .await?
        .map(UserResponse::from)
        .ok_or_else(|| user_not_found(id))
}

pub async fn get_by_email(pool: &PgPool, email: &str) -> Result<UserResponse, AppError> {
    repo::users::find_by_email(pool, email)
        .await?
        .map(UserResponse::from)
        .ok_or_else(|| AppError::NotFound(format!("User not found with email: {email}")))
}

pub async fn create(
    pool: &PgPool,
    current: &User,
    request: CreateUserRequest,
) -> Result<UserResponse, AppError> {
    require_admin(current, "create")?;
    if repo::users::exists_by_email(pool, &request.email).await? {
        return Err(AppError::ValidationError(format!(
            "User already exists with email: {}",
            request.email
        )));
    }
    let plain = request
        .password
        .as_deref()
        .filter(|p| !p.is_empty())
        .ok_or_else(|| AppError::ValidationError("Password is required".to_string()))?;
    let hash = password::hash_password(plain)?;

    let user = repo::users::insert(
        pool,
        &request.first_name,
        &request.last_name,
        &request.email,
        Some(&hash),
        request.phone.as_deref(),
        request.role.unwrap_or(UserRole::Attendee),
    )
    .await?;
    Ok(user.into())
}

pub async fn update(
    pool: &PgPool,
    current: &User,
    id: i64,
    request: UpdateUserRequest,
) -> Result<UserResponse, AppError> {
    require_admin(current, "update")?;
    repo::users::update(
        pool,
        id,
        &request.first_name,
        &request.last_name,
        request.phone.as_deref(),
        request.role,
    )
    .await?
    .map(UserResponse::from)
    .ok_or_else(|| user_not_found(id))
}

pub async fn delete(pool: &PgPool, current: &User, id: i64) -> Result<(), AppError> {
    require_admin(current, "delete")?;
    if repo::users::delete(pool, id).await? == 0 {
        return Err(user_not_found(id));
    }
    Ok(())
}
