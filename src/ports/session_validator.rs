//! Session validation port for bearer tokens.
//!
//! HTTP middleware hands the raw token to a `SessionValidator` and gets back
//! the caller's identity and role.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Validates access tokens and extracts user identity.
///
/// # Contract
///
/// Implementations must:
/// - Validate the token signature and expiry
/// - Return `AuthError::InvalidToken` for malformed/bad signature tokens
/// - Return `AuthError::TokenExpired` for expired tokens
/// - Return `AuthError::UnknownRole` when the account type is not recognised
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validate a token (without the "Bearer " prefix).
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
