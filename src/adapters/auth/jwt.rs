//! HS256 bearer-token validator.
//!
//! Tokens are signed with a shared secret and carry the account type in a
//! `type` claim (`user`, `business` or `admin`).

use std::time::Duration;

use async_trait::async_trait;
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::domain::foundation::{AuthError, AuthenticatedUser, Role};
use crate::ports::SessionValidator;

/// Claims carried by KéyaKé access tokens.
#[derive(Debug, Deserialize)]
struct KeyakeClaims {
    sub: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(rename = "type")]
    account_type: String,
}

/// Validates HS256 tokens signed with the configured secret.
pub struct JwtSessionValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtSessionValidator {
    pub fn new(secret: &SecretString, leeway: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = leeway.as_secs();
        validation.validate_exp = true;
        validation.validate_aud = false;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            decoding_key: DecodingKey::from_secret(secret.expose_secret().as_bytes()),
            validation,
        }
    }
}

#[async_trait]
impl SessionValidator for JwtSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let data = decode::<KeyakeClaims>(token, &self.decoding_key, &self.validation).map_err(
            |e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token expired");
                    AuthError::TokenExpired
                }
                ErrorKind::InvalidSignature => {
                    tracing::warn!("Token signature mismatch");
                    AuthError::InvalidToken
                }
                _ => {
                    tracing::warn!("Token validation failed: {}", e);
                    AuthError::InvalidToken
                }
            },
        )?;
        let claims = data.claims;

        if claims.sub.trim().is_empty() {
            tracing::warn!("Token has an empty subject");
            return Err(AuthError::InvalidToken);
        }

        let role = Role::from_claim(&claims.account_type).ok_or_else(|| {
            tracing::warn!("Unknown account type in token: {}", claims.account_type);
            AuthError::UnknownRole(claims.account_type.clone())
        })?;

        Ok(AuthenticatedUser::new(claims.sub, claims.email, role))
    }
}

impl std::fmt::Debug for JwtSessionValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSessionValidator")
            .field("leeway", &self.validation.leeway)
            .finish_non_exhaustive()
    }
}
