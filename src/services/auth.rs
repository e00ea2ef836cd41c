use sqlx::PgPool;

use crate::auth::{jwt, password};
use crate::config::Config;
use crate::dto::{AuthResponse, LoginRequest, RegisterRequest};
use crate::models::UserRole;
use crate::repo;
use crate::utils::error::AppError;

pub async fn register(
    pool: &PgPool,
    config: &Config,
    request: RegisterRequest,
) -> Result<AuthResponse, AppError> {
    // Admin accounts are only created through the bootstrap path or by an
    // existing admin, never via self-registration.
    if request.role == UserRole::Admin {
        return Err(AppError::ValidationError(
            "ADMIN role cannot be selected during registration".to_string(),
        ));
    }
    if request.password.is_empty() {
        return Err(AppError::ValidationError("Password is required".to_string()));
    }
    if repo::users::exists_by_email(pool, &request.email).await? {
        return Err(AppError::ValidationError(format!(
            "User already exists with email: {}",
            request.email
        )));
    }

    let hash = password::hash_password(&request.password)?;
    let user = repo::users::insert(
        pool,
        &request.first_name,
        &request.last_name,
        &request.email,
        Some(&hash),
        request.phone.as_deref(),
        request.role,
    )
    .await?;

    let token = jwt::generate_token(
        &config.jwt_secret,
        config.jwt_expiration_hours,
        &user.email,
        user.role,
    )?;
    tracing::info!(user_id = user.id, "User registered");
    Ok(AuthResponse {
        token,
        user: user.into(),
    })
}

pub async fn login(
    pool: &PgPool,
    config: &Config,
    request: LoginRequest,
) -> Result<AuthResponse, AppError> {
    let invalid = || AppError::AuthError("Invalid email or password".to_string());

    let user = repo::users::find_by_email(pool, &request.email)
        .await?
        .ok_or_else(invalid)?;

    let verified = user
        .password_hash
        .as_deref()
        .map(|hash| password::verify_password(&request.password, hash))
        .unwrap_or(false);
    if !verified {
        return Err(invalid());
    }

    let token = jwt::generate_token(
        &config.jwt_secret,
        config.jwt_expiration_hours,
        &user.email,
        user.role,
    )?;
    Ok(AuthResponse {
        token,
        user: user.into(),
    })
}

/// Startup bootstrap: make sure an administrator exists when credentials
/// are provided via the environment.
pub async fn ensure_admin(pool: &PgPool, email: &str, plain_password: &str) -> Result<(), AppError> {
    if repo::users::exists_by_email(pool, email).await? {
        return Ok(());
    }
    let hash = password::hash_password(plain_password)?;
    repo::users::insert(pool, "System", "Administrator", email, Some(&hash), None, UserRole::Admin)
        .await?;
    tracing::info!(email, "Seeded administrator account");
    Ok(())
}
