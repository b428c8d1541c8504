//! Authentication types for the domain layer.
//!
//! An `AuthenticatedUser` is what a validated bearer token boils down to.
//! Any token format can populate it through the `SessionValidator` port.

use super::{BusinessId, UserId, ValidationError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Account type carried by the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Participant,
    Business,
    Admin,
}

impl Role {
    /// Parses the `type` claim. Participants are issued `user` tokens.
    pub fn from_claim(claim: &str) -> Option<Self> {
        match claim {
            "user" | "participant" => Some(Role::Participant),
            "business" => Some(Role::Business),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    pub fn as_claim(&self) -> &'static str {
        match self {
            Role::Participant => "user",
            Role::Business => "business",
            Role::Admin => "admin",
        }
    }
}

/// Caller identity extracted from a validated token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Token subject: participant, business or admin id depending on `role`.
    pub subject: String,

    pub email: Option<String>,

    pub role: Role,
}

impl AuthenticatedUser {
    pub fn new(subject: impl Into<String>, email: Option<String>, role: Role) -> Self {
        Self {
            subject: subject.into(),
            email,
            role,
        }
    }

    /// The caller as a participant, if they are one.
    pub fn participant_id(&self) -> Option<Result<UserId, ValidationError>> {
        (self.role == Role::Participant).then(|| UserId::new(self.subject.clone()))
    }

    /// The caller as a business, if they are one.
    pub fn business_id(&self) -> Option<Result<BusinessId, ValidationError>> {
        (self.role == Role::Business).then(|| BusinessId::new(self.subject.clone()))
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Authentication errors that can occur during token validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Missing, malformed, or badly signed token.
    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    /// Token is valid but its `type` claim is unknown.
    #[error("Unknown account type: {0}")]
    UnknownRole(String),

    #[error("Insufficient permissions")]
    InsufficientPermissions,
}

impl AuthError {
    /// Returns true if this error indicates the user should re-authenticate.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(self, AuthError::InvalidToken | AuthError::TokenExpired)
    }
}
