//! GetBusinessSurveysHandler - surveys owned by one business.

use std::sync::Arc;

use crate::domain::foundation::BusinessId;
use crate::domain::survey::{Survey, SurveyError};
use crate::ports::SurveyRepository;

#[derive(Debug, Clone)]
pub struct GetBusinessSurveysQuery {
    pub business_id: BusinessId,
}

pub struct GetBusinessSurveysHandler {
    repository: Arc<dyn SurveyRepository>,
}

impl GetBusinessSurveysHandler {
    pub fn new(repository: Arc<dyn SurveyRepository>) -> Self {
        Self { repository }
    }

    /// An unknown business simply has no surveys.
    pub async fn handle(&self, query: GetBusinessSurveysQuery) -> Result<Vec<Survey>, SurveyError> {
        Ok(self.repository.list_by_business(&query.business_id).await?)
    }
}
