//! JWT Token Handler
//! Mission: Sign claims and validate incoming tokens against the process secret

use crate::auth::{error::AuthError, models::Claims};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::fmt;
use tracing::debug;

/// The one signing algorithm tokens are issued with and accepted under
pub const TOKEN_ALGORITHM: Algorithm = Algorithm::HS256;

/// Process-wide symmetric signing key. Never empty.
#[derive(Clone)]
pub struct JwtSecret(String);

impl JwtSecret {
    /// Returns `None` for an empty secret so that an unset and a blank
    /// `JWT_SECRET` behave the same way.
    pub fn new(secret: impl Into<String>) -> Option<Self> {
        let secret = secret.into();
        if secret.is_empty() {
            None
        } else {
            Some(Self(secret))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for JwtSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("JwtSecret(<redacted>)")
    }
}

/// JWT Handler for token operations.
///
/// Read-only after construction, so one instance is shared by every request
/// without locking.
pub struct JwtHandler {
    secret: Option<JwtSecret>,
    validation: Validation,
}

impl JwtHandler {
    pub fn new(secret: Option<JwtSecret>) -> Self {
        let mut validation = Validation::new(TOKEN_ALGORITHM);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp"]);

        Self { secret, validation }
    }

    pub fn secret(&self) -> Option<&JwtSecret> {
        self.secret.as_ref()
    }

    fn secret_bytes(&self) -> Result<&[u8], AuthError> {
        self.secret
            .as_ref()
            .map(|s| s.0.as_bytes())
            .ok_or(AuthError::SecretNotSet)
    }

    /// Sign claims into a compact `header.claims.signature` token
    pub fn sign(&self, claims: &Claims) -> Result<String, AuthError> {
        let key = EncodingKey::from_secret(self.secret_bytes()?);
        encode(&Header::new(TOKEN_ALGORITHM), claims, &key).map_err(AuthError::Signing)
    }

    /// Validate a JWT token and extract claims.
    ///
    /// Rejects a bad signature, an expired `exp`, a missing `exp`, and any
    /// header algorithm other than [`TOKEN_ALGORITHM`].
    pub fn validate_token(&self, token: &str) -> Result<Claims, AuthError> {
        let key = DecodingKey::from_secret(self.secret_bytes()?);
        let decoded =
            decode::<Claims>(token, &key, &self.validation).map_err(AuthError::InvalidToken)?;

        debug!(email = %decoded.claims.email, "Validated JWT");

        Ok(decoded.claims)
    }
}
