//! GetBusinessProfileHandler - public profile of one business.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::{BusinessId, DomainError, ErrorCode, ValidationError};
use crate::ports::{AccountReader, BusinessProfile};

#[derive(Debug, Clone)]
pub struct GetBusinessProfileQuery {
    pub business_id: BusinessId,
}

/// Errors from business account queries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BusinessError {
    #[error("Business not found: {0}")]
    NotFound(BusinessId),

    #[error("Validation failed: {field} - {reason}")]
    ValidationFailed { field: String, reason: String },

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl BusinessError {
    pub fn code(&self) -> ErrorCode {
        match self {
            BusinessError::NotFound(_) => ErrorCode::BusinessNotFound,
            BusinessError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            BusinessError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            BusinessError::NotFound(_) => "Business not found".to_string(),
            BusinessError::ValidationFailed { field, reason } => format!("{}: {}", field, reason),
            BusinessError::Infrastructure(msg) => msg.clone(),
        }
    }
}

impl From<ValidationError> for BusinessError {
    fn from(err: ValidationError) -> Self {
        BusinessError::ValidationFailed {
            field: err.field().to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<DomainError> for BusinessError {
    fn from(err: DomainError) -> Self {
        BusinessError::Infrastructure(err.to_string())
    }
}

pub struct GetBusinessProfileHandler {
    accounts: Arc<dyn AccountReader>,
}

impl GetBusinessProfileHandler {
    pub fn new(accounts: Arc<dyn AccountReader>) -> Self {
        Self { accounts }
    }

    pub async fn handle(
        &self,
        query: GetBusinessProfileQuery,
    ) -> Result<BusinessProfile, BusinessError> {
        tracing::debug!(business_id = %query.business_id, "Fetching business profile");
        self.accounts
            .find_business(&query.business_id)
            .await?
            .ok_or(BusinessError::NotFound(query.business_id))
    }
}
