use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

pub mod jwt;
pub mod password;

use crate::models::User;
use crate::repo;
use crate::state::AppState;
use crate::utils::error::AppError;

/// The authenticated caller, resolved once per request from the bearer
/// token. Handlers receive it as an extractor argument and pass the user
/// down to services explicitly.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl std::ops::Deref for CurrentUser {
    type Target = User;

    fn deref(&self) -> &User {
        &self.0
    }
}

#[axum::async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let unauthorized = || AppError::AuthError("Unauthorized".to_string());

        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or_else(unauthorized)?;

        let claims = jwt::decode_token(&state.config.jwt_secret, token)?;

        let user = repo::users::find_by_email(&state.pool, &claims.sub)
            .await?
            .ok_or_else(unauthorized)?;

        // Tokens issued before a role change are not honored.
        if user.role != claims.role {
            return Err(unauthorized());
        }

        Ok(CurrentUser(user))
    }
}
