//! Mock session validator for tests.
//!
//! ```ignore
//! let validator = MockSessionValidator::new()
//!     .with_participant("participant-token", "user_1")
//!     .with_business("business-token", "business_1");
//! ```

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, Role};
use crate::ports::SessionValidator;

/// Maps fixed tokens to users. Unknown tokens return `InvalidToken`.
#[derive(Debug, Default, Clone)]
pub struct MockSessionValidator {
    tokens: HashMap<String, AuthenticatedUser>,
    force_error: Option<AuthError>,
}

impl MockSessionValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept `token` as `user`.
    pub fn with_user(mut self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.tokens.insert(token.into(), user);
        self
    }

    pub fn with_participant(self, token: impl Into<String>, user_id: impl Into<String>) -> Self {
        self.with_role(token, user_id, Role::Participant)
    }

    pub fn with_business(self, token: impl Into<String>, business_id: impl Into<String>) -> Self {
        self.with_role(token, business_id, Role::Business)
    }

    pub fn with_admin(self, token: impl Into<String>, admin_id: impl Into<String>) -> Self {
        self.with_role(token, admin_id, Role::Admin)
    }

    /// Fail every validation with `error`.
    pub fn with_error(mut self, error: AuthError) -> Self {
        self.force_error = Some(error);
        self
    }

    fn with_role(self, token: impl Into<String>, subject: impl Into<String>, role: Role) -> Self {
        let subject = subject.into();
        let email = Some(format!("{}@test.example.com", subject));
        self.with_user(token, AuthenticatedUser::new(subject, email, role))
    }
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        if let Some(error) = &self.force_error {
            return Err(error.clone());
        }
        self.tokens.get(token).cloned().ok_or(AuthError::InvalidToken)
    }
}
