//! HTTP handlers for business endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::application::{BusinessError, GetBusinessProfileHandler, GetBusinessProfileQuery};
use crate::domain::foundation::BusinessId;
use crate::ports::AccountReader;

use super::dto::BusinessProfileResponse;

#[derive(Clone)]
pub struct BusinessAppState {
    pub accounts: Arc<dyn AccountReader>,
}

impl BusinessAppState {
    pub fn new(accounts: Arc<dyn AccountReader>) -> Self {
        Self { accounts }
    }
}

/// GET /api/business/:business_id
pub async fn get_business_profile(
    State(state): State<BusinessAppState>,
    Path(business_id): Path<String>,
) -> Result<Response, BusinessApiError> {
    let business_id = BusinessId::new(business_id).map_err(BusinessError::from)?;
    let handler = GetBusinessProfileHandler::new(state.accounts.clone());
    let profile = handler.handle(GetBusinessProfileQuery { business_id }).await?;
    Ok(Json(BusinessProfileResponse::from(&profile)).into_response())
}

/// HTTP wrapper around `BusinessError`.
#[derive(Debug)]
pub struct BusinessApiError(pub BusinessError);

impl From<BusinessError> for BusinessApiError {
    fn from(err: BusinessError) -> Self {
        Self(err)
    }
}

impl IntoResponse for BusinessApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self.0 {
            BusinessError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new(self.0.code().to_string(), self.0.message()),
            ),
            BusinessError::ValidationFailed { field, .. } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(self.0.code().to_string(), self.0.message())
                    .with_details(serde_json::json!({ "field": field })),
            ),
            BusinessError::Infrastructure(msg) => {
                tracing::error!(error = %msg, "Business request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal())
            }
        };
        (status, Json(body)).into_response()
    }
}
