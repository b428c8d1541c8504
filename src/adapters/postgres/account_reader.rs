//! PostgreSQL implementation of AccountReader.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::foundation::{BusinessId, DomainError, Timestamp, UserId, ValidationError};
use crate::ports::{AccountReader, BusinessProfile, ParticipantProfile};

/// Survey activity is aggregated per business at read time.
const SELECT_BUSINESSES: &str = r#"
    SELECT b.id, b.name, b.email, b.phone, b.tax_id, b.logo, b.description,
           b.website, b.industry, b.credits, b.is_premium, b.created_at,
           COUNT(s.id) AS surveys_created,
           COALESCE(SUM(s.participant_count), 0)::BIGINT AS total_responses
    FROM businesses b
    LEFT JOIN surveys s ON s.business_id = b.id
"#;

const GROUP_BUSINESSES: &str = "GROUP BY b.id";

#[derive(Clone)]
pub struct PostgresAccountReader {
    pool: PgPool,
}

impl PostgresAccountReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountReader for PostgresAccountReader {
    async fn find_business(&self, id: &BusinessId) -> Result<Option<BusinessProfile>, DomainError> {
        let row: Option<BusinessRow> = sqlx::query_as(&format!(
            "{} WHERE b.id = $1 {}",
            SELECT_BUSINESSES, GROUP_BUSINESSES
        ))
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch business: {}", e)))?;

        row.map(BusinessProfile::try_from).transpose()
    }

    async fn list_businesses(&self) -> Result<Vec<BusinessProfile>, DomainError> {
        let rows: Vec<BusinessRow> = sqlx::query_as(&format!(
            "{} {} ORDER BY b.created_at DESC, b.id",
            SELECT_BUSINESSES, GROUP_BUSINESSES
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list businesses: {}", e)))?;

        rows.into_iter().map(BusinessProfile::try_from).collect()
    }

    async fn list_participants(&self) -> Result<Vec<ParticipantProfile>, DomainError> {
        let rows: Vec<ParticipantRow> = sqlx::query_as(
            r#"
            SELECT id, name, email, phone, status, photo_url,
                   points, surveys_completed, created_at
            FROM participants
            ORDER BY created_at DESC, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list participants: {}", e)))?;

        rows.into_iter().map(ParticipantProfile::try_from).collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Row types
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, sqlx::FromRow)]
struct BusinessRow {
    id: String,
    name: String,
    email: String,
    phone: Option<String>,
    tax_id: Option<String>,
    logo: Option<String>,
    description: Option<String>,
    website: Option<String>,
    industry: Option<String>,
    credits: i32,
    is_premium: bool,
    created_at: DateTime<Utc>,
    surveys_created: i64,
    total_responses: i64,
}

impl TryFrom<BusinessRow> for BusinessProfile {
    type Error = DomainError;

    fn try_from(row: BusinessRow) -> Result<Self, Self::Error> {
        Ok(BusinessProfile {
            id: BusinessId::new(row.id).map_err(corrupt_row)?,
            company_name: row.name,
            email: row.email,
            phone: row.phone,
            tax_id: row.tax_id,
            logo: row.logo,
            description: row.description,
            website: row.website,
            industry: row.industry,
            credits: row.credits,
            is_premium: row.is_premium,
            surveys_created: u64::try_from(row.surveys_created).unwrap_or(0),
            total_responses: u64::try_from(row.total_responses).unwrap_or(0),
            joined_at: Timestamp::from_datetime(row.created_at),
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ParticipantRow {
    id: String,
    name: String,
    email: String,
    phone: Option<String>,
    status: Option<String>,
    photo_url: Option<String>,
    points: i32,
    surveys_completed: i32,
    created_at: DateTime<Utc>,
}

impl TryFrom<ParticipantRow> for ParticipantProfile {
    type Error = DomainError;

    fn try_from(row: ParticipantRow) -> Result<Self, Self::Error> {
        Ok(ParticipantProfile {
            id: UserId::new(row.id).map_err(corrupt_row)?,
            name: row.name,
            email: row.email,
            phone: row.phone,
            status: row.status,
            photo_url: row.photo_url,
            points: row.points,
            surveys_completed: row.surveys_completed,
            joined_at: Timestamp::from_datetime(row.created_at),
        })
    }
}

fn corrupt_row(err: ValidationError) -> DomainError {
    DomainError::database(format!("Corrupt account row: {}", err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    fn business_row() -> BusinessRow {
        BusinessRow {
            id: "business_1".to_string(),
            name: "Acme".to_string(),
            email: "hello@acme.test".to_string(),
            phone: None,
            tax_id: Some("CI-123".to_string()),
            logo: None,
            description: Some("Snacks".to_string()),
            website: None,
            industry: Some("Food".to_string()),
            credits: 40,
            is_premium: true,
            created_at: Utc::now(),
            surveys_created: 3,
            total_responses: 12,
        }
    }

    #[test]
    fn business_row_converts_with_activity() {
        let profile = BusinessProfile::try_from(business_row()).unwrap();
        assert_eq!(profile.id.as_str(), "business_1");
        assert_eq!(profile.company_name, "Acme");
        assert_eq!(profile.surveys_created, 3);
        assert_eq!(profile.total_responses, 12);
        assert!(profile.is_premium);
    }

    #[test]
    fn business_row_with_blank_id_is_corrupt() {
        let mut row = business_row();
        row.id = String::new();
        assert_eq!(BusinessProfile::try_from(row).unwrap_err().code, ErrorCode::DatabaseError);
    }

    #[test]
    fn participant_row_converts() {
        let profile = ParticipantProfile::try_from(ParticipantRow {
            id: "user_1".to_string(),
            name: "Awa".to_string(),
            email: "awa@example.test".to_string(),
            phone: None,
            status: Some("Étudiant".to_string()),
            photo_url: None,
            points: 30,
            surveys_completed: 3,
            created_at: Utc::now(),
        })
        .unwrap();
        assert_eq!(profile.id.as_str(), "user_1");
        assert_eq!(profile.status.as_deref(), Some("Étudiant"));
        assert_eq!(profile.points, 30);
    }
}
