//! Token Issuer
//! Mission: Trade a verified credential for a signed, time-limited admin token

use crate::auth::{
    credential_store::CredentialStore,
    error::AuthError,
    jwt::JwtHandler,
    models::{Claims, Credential, Role},
};
use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::{debug, warn};

pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 72;
/// Longest accepted token lifetime: one year
pub const MAX_TOKEN_TTL_HOURS: i64 = 24 * 365;

/// A freshly signed token together with the claims it carries
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub claims: Claims,
}

pub struct TokenIssuer {
    credentials: CredentialStore,
    jwt: Arc<JwtHandler>,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(credentials: CredentialStore, jwt: Arc<JwtHandler>) -> Self {
        Self {
            credentials,
            jwt,
            ttl: Duration::hours(DEFAULT_TOKEN_TTL_HOURS),
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Verify the attempt and sign an admin token for it.
    ///
    /// Credentials are checked before the secret, so a misconfigured server
    /// still answers bad logins with 401.
    pub fn issue(&self, attempt: &Credential) -> Result<IssuedToken, AuthError> {
        if !self.credentials.verify(attempt) {
            warn!(email = %attempt.email, "Failed login attempt");
            return Err(AuthError::InvalidCredentials);
        }

        let expires_at = Utc::now()
            .checked_add_signed(self.ttl)
            .ok_or(AuthError::Internal("Invalid token expiry"))?;

        let claims = Claims {
            email: attempt.email.clone(),
            role: Role::ADMIN,
            exp: expires_at.timestamp(),
        };

        let token = self.jwt.sign(&claims)?;

        debug!(
            email = %claims.email,
            expires_at = %expires_at.to_rfc3339(),
            "Issued JWT"
        );

        Ok(IssuedToken { token, claims })
    }
}
