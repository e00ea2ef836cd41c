use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::models::UserRole;
use crate::utils::error::AppError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Email of the user the token was issued to.
    pub sub: String,
    /// Role at issue time; re-checked against the stored user on every
    /// request.
    pub role: UserRole,
    pub iat: i64,
    pub exp: i64,
}

pub fn generate_token(
    secret: &str,
    expiration_hours: i64,
    email: &str,
    role: UserRole,
) -> Result<String, AppError> {
    let now = Utc::now();
    let claims = Claims {
        sub: email.to_string(),
        role,
        iat: now.timestamp(),
        exp: (now + Duration::hours(expiration_hours)).timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::InternalServerError(format!("Failed to sign token: {e}")))
}

pub fn decode_token(secret: &str, token: &str) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::AuthError("Invalid or expired token".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_round_trips_subject_and_role() {
        let token = generate_token("test-secret", 1, "ada@example.com", UserRole::Organizer)
            .expect("token should be generated");
        let claims = decode_token("test-secret", &token).expect("token should decode");
        assert_eq!(claims.sub, "ada@example.com");
        assert_eq!(claims.role, UserRole::Organizer);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = generate_token("test-secret", 1, "ada@example.com", UserRole::Attendee)
            .expect("token should be generated");
        assert!(decode_token("other-secret", &token).is_err());
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(decode_token("test-secret", "not.a.token").is_err());
    }
}
