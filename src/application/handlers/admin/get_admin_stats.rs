//! GetAdminStatsHandler - platform counts for the admin dashboard.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::{AuthenticatedUser, DomainError};
use crate::ports::{AdminStats, StatsReader};

#[derive(Debug, Clone)]
pub struct GetAdminStatsQuery {
    pub requested_by: AuthenticatedUser,
}

/// Errors from admin queries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AdminError {
    #[error("Admin access required")]
    Forbidden,

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl From<DomainError> for AdminError {
    fn from(err: DomainError) -> Self {
        AdminError::Infrastructure(err.to_string())
    }
}

pub struct GetAdminStatsHandler {
    reader: Arc<dyn StatsReader>,
}

impl GetAdminStatsHandler {
    pub fn new(reader: Arc<dyn StatsReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: GetAdminStatsQuery) -> Result<AdminStats, AdminError> {
        if !query.requested_by.is_admin() {
            tracing::warn!(user = %query.requested_by.subject, "Non-admin requested platform stats");
            return Err(AdminError::Forbidden);
        }
        Ok(self.reader.get_admin_stats().await?)
    }
}
