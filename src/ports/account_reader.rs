//! Account reader port (read side).
//!
//! Account rows are written by the auth service; this backend only reads
//! them. Credentials never leave the adapter.

use crate::domain::foundation::{BusinessId, DomainError, Timestamp, UserId};
use async_trait::async_trait;

/// Public profile of a business account.
///
/// `surveys_created` and `total_responses` are derived from the business's
/// surveys at read time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessProfile {
    pub id: BusinessId,
    pub company_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub tax_id: Option<String>,
    pub logo: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub industry: Option<String>,
    pub credits: i32,
    pub is_premium: bool,
    pub surveys_created: u64,
    pub total_responses: u64,
    pub joined_at: Timestamp,
}

impl BusinessProfile {
    /// A profile with only the mandatory columns set.
    pub fn new(
        id: BusinessId,
        company_name: impl Into<String>,
        email: impl Into<String>,
        joined_at: Timestamp,
    ) -> Self {
        Self {
            id,
            company_name: company_name.into(),
            email: email.into(),
            phone: None,
            tax_id: None,
            logo: None,
            description: None,
            website: None,
            industry: None,
            credits: 0,
            is_premium: false,
            surveys_created: 0,
            total_responses: 0,
            joined_at,
        }
    }
}

/// A participant account with its reward counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Occupation label chosen at sign-up (e.g. `Étudiant`).
    pub status: Option<String>,
    pub photo_url: Option<String>,
    pub points: i32,
    pub surveys_completed: i32,
    pub joined_at: Timestamp,
}

impl ParticipantProfile {
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>, joined_at: Timestamp) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            phone: None,
            status: None,
            photo_url: None,
            points: 0,
            surveys_completed: 0,
            joined_at,
        }
    }
}

/// Read port for business and participant accounts.
///
/// Lists are ordered newest account first, ties broken by id.
#[async_trait]
pub trait AccountReader: Send + Sync {
    async fn find_business(&self, id: &BusinessId) -> Result<Option<BusinessProfile>, DomainError>;

    async fn list_businesses(&self) -> Result<Vec<BusinessProfile>, DomainError>;

    async fn list_participants(&self) -> Result<Vec<ParticipantProfile>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn AccountReader) {}
    }

    #[test]
    fn new_business_profile_starts_without_activity() {
        let profile = BusinessProfile::new(
            BusinessId::new("business_1").unwrap(),
            "Acme",
            "hello@acme.test",
            Timestamp::now(),
        );
        assert_eq!(profile.surveys_created, 0);
        assert_eq!(profile.credits, 0);
        assert!(!profile.is_premium);
    }
}
