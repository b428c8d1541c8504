//! ListParticipantsHandler - every participant account with reward counters.

use std::sync::Arc;

use crate::domain::foundation::AuthenticatedUser;
use crate::ports::{AccountReader, ParticipantProfile};

use super::AdminError;

#[derive(Debug, Clone)]
pub struct ListParticipantsQuery {
    pub requested_by: AuthenticatedUser,
}

pub struct ListParticipantsHandler {
    accounts: Arc<dyn AccountReader>,
}

impl ListParticipantsHandler {
    pub fn new(accounts: Arc<dyn AccountReader>) -> Self {
        Self { accounts }
    }

    pub async fn handle(
        &self,
        query: ListParticipantsQuery,
    ) -> Result<Vec<ParticipantProfile>, AdminError> {
        if !query.requested_by.is_admin() {
            tracing::warn!(user = %query.requested_by.subject, "Non-admin requested participant list");
            return Err(AdminError::Forbidden);
        }
        Ok(self.accounts.list_participants().await?)
    }
}
