//! ListBusinessesHandler - every business account, for the admin console.

use std::sync::Arc;

use crate::domain::foundation::AuthenticatedUser;
use crate::ports::{AccountReader, BusinessProfile};

use super::AdminError;

#[derive(Debug, Clone)]
pub struct ListBusinessesQuery {
    pub requested_by: AuthenticatedUser,
}

pub struct ListBusinessesHandler {
    accounts: Arc<dyn AccountReader>,
}

impl ListBusinessesHandler {
    pub fn new(accounts: Arc<dyn AccountReader>) -> Self {
        Self { accounts }
    }

    pub async fn handle(
        &self,
        query: ListBusinessesQuery,
    ) -> Result<Vec<BusinessProfile>, AdminError> {
        if !query.requested_by.is_admin() {
            tracing::warn!(user = %query.requested_by.subject, "Non-admin requested business list");
            return Err(AdminError::Forbidden);
        }
        Ok(self.accounts.list_businesses().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::in_memory::InMemorySurveyStore;
    use crate::domain::foundation::Role;

    fn query(role: Role) -> ListBusinessesQuery {
        ListBusinessesQuery {
            requested_by: AuthenticatedUser::new("someone", None, role),
        }
    }

    #[tokio::test]
    async fn admin_lists_all_businesses() {
        let store = InMemorySurveyStore::new()
            .with_business("business_1")
            .with_business("business_2");
        let handler = ListBusinessesHandler::new(Arc::new(store));

        let businesses = handler.handle(query(Role::Admin)).await.unwrap();

        let mut ids: Vec<&str> = businesses.iter().map(|b| b.id.as_str()).collect();
        ids.sort();
        assert_eq!(ids, vec!["business_1", "business_2"]);
    }

    #[tokio::test]
    async fn non_admins_are_forbidden() {
        let store = InMemorySurveyStore::new().with_business("business_1");
        let handler = ListBusinessesHandler::new(Arc::new(store));

        for role in [Role::Participant, Role::Business] {
            assert_eq!(handler.handle(query(role)).await, Err(AdminError::Forbidden));
        }
    }
}
