//! PostgreSQL implementation of StatsReader.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::DomainError;
use crate::ports::{AdminStats, StatsReader};

type CountsRow = (i64, i64, i64, i64, i64);

#[derive(Clone)]
pub struct PostgresStatsReader {
    pool: PgPool,
}

impl PostgresStatsReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatsReader for PostgresStatsReader {
    async fn get_admin_stats(&self) -> Result<AdminStats, DomainError> {
        let (businesses, active_businesses, participants, surveys, active): CountsRow = sqlx::query_as(
            r#"
            SELECT
                (SELECT COUNT(*) FROM businesses),
                (SELECT COUNT(*) FROM businesses b
                 WHERE EXISTS (SELECT 1 FROM surveys s
                               WHERE s.business_id = b.id AND s.status = 'active')),
                (SELECT COUNT(*) FROM participants),
                (SELECT COUNT(*) FROM surveys),
                (SELECT COUNT(*) FROM surveys WHERE status = 'active')
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to read admin stats: {}", e)))?;

        Ok(AdminStats {
            total_businesses: count(businesses),
            active_businesses: count(active_businesses),
            total_participants: count(participants),
            total_surveys: count(surveys),
            active_surveys: count(active),
        })
    }
}

fn count(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}
