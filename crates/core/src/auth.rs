//! Single-admin authentication: one statically configured password traded
//! for a short-lived signed token.

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Issued tokens expire after this many hours.
pub const TOKEN_TTL_HOURS: i64 = 12;

/// The only claim set this service issues.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminClaims {
    pub role: String,
    pub exp: i64,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("ADMIN_PASSWORD is not configured")]
    NotConfigured,

    #[error("Invalid credentials")]
    BadPassword,

    #[error("Missing token")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("token signing failed: {0}")]
    Signing(jsonwebtoken::errors::Error),
}

/// Compare the supplied password against the configured one (exact string
/// equality; there is only one admin) and issue a token on match.
pub fn login(supplied: &str, configured: &str, secret: &str) -> Result<String, AuthError> {
    if configured.is_empty() {
        return Err(AuthError::NotConfigured);
    }
    if supplied.is_empty() || supplied != configured {
        return Err(AuthError::BadPassword);
    }
    issue_token(secret)
}

pub fn issue_token(secret: &str) -> Result<String, AuthError> {
    let claims = AdminClaims {
        role: "admin".to_string(),
        exp: (Utc::now() + chrono::Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(AuthError::Signing)
}

/// Check signature and expiry, nothing else. There is no revocation list and
/// no scoping beyond the single admin role.
pub fn verify_token(token: &str, secret: &str) -> Result<AdminClaims, AuthError> {
    decode::<AdminClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AuthError::InvalidToken)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn login_round_trips_through_verification() {
        let token = login("hunter2", "hunter2", SECRET).unwrap();
        let claims = verify_token(&token, SECRET).unwrap();
        assert_eq!(claims.role, "admin");
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn wrong_password_never_issues_a_token() {
        assert!(matches!(
            login("guess", "hunter2", SECRET),
            Err(AuthError::BadPassword)
        ));
        assert!(matches!(
            login("", "hunter2", SECRET),
            Err(AuthError::BadPassword)
        ));
    }

    #[test]
    fn unconfigured_password_is_a_server_error() {
        assert!(matches!(
            login("anything", "", SECRET),
            Err(AuthError::NotConfigured)
        ));
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = issue_token(SECRET).unwrap();
        assert!(matches!(
            verify_token(&token, "other-secret"),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn expired_token_is_rejected() {
        let claims = AdminClaims {
            role: "admin".to_string(),
            exp: (Utc::now() - chrono::Duration::hours(1)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();
        assert!(matches!(
            verify_token(&token, SECRET),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(matches!(
            verify_token("not.a.token", SECRET),
            Err(AuthError::InvalidToken)
        ));
    }
}
