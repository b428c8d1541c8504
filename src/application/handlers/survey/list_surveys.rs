//! ListSurveysHandler - every survey with its questions, newest first.

use std::sync::Arc;

use crate::domain::survey::{Survey, SurveyError};
use crate::ports::SurveyRepository;

pub struct ListSurveysHandler {
    repository: Arc<dyn SurveyRepository>,
}

impl ListSurveysHandler {
    pub fn new(repository: Arc<dyn SurveyRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<Survey>, SurveyError> {
        let surveys = self.repository.list_all().await?;
        tracing::debug!(count = surveys.len(), "Listed surveys");
        Ok(surveys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::survey::testing::{sample_survey, store_with};

    #[tokio::test]
    async fn lists_all_surveys() {
        let first = sample_survey("business_1");
        let store = store_with(&first).await;
        store.save(&sample_survey("business_2")).await.unwrap();

        let surveys = ListSurveysHandler::new(store).handle().await.unwrap();

        assert_eq!(surveys.len(), 2);
        assert!(surveys.iter().all(|s| s.questions().len() == 3));
    }
}
