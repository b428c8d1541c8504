//! GetSurveyHandler - Query handler for one survey with its questions.

use std::sync::Arc;

use crate::domain::foundation::SurveyId;
use crate::domain::survey::{Survey, SurveyError};
use crate::ports::SurveyRepository;

#[derive(Debug, Clone)]
pub struct GetSurveyQuery {
    pub survey_id: SurveyId,
}

pub struct GetSurveyHandler {
    repository: Arc<dyn SurveyRepository>,
}

impl GetSurveyHandler {
    pub fn new(repository: Arc<dyn SurveyRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetSurveyQuery) -> Result<Survey, SurveyError> {
        self.repository
            .find_by_id(&query.survey_id)
            .await?
            .ok_or_else(|| SurveyError::not_found(query.survey_id))
    }
}
