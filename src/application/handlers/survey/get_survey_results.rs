//! GetSurveyResultsHandler - live vote tallies for a survey.
//!
//! Tallies are recomputed from the stored answers on every request.

use std::sync::Arc;

use crate::domain::foundation::SurveyId;
use crate::domain::results::{aggregate, with_unanswered, QuestionResult};
use crate::domain::survey::SurveyError;
use crate::ports::{AnswerRepository, SurveyRepository};

#[derive(Debug, Clone)]
pub struct GetSurveyResultsQuery {
    pub survey_id: SurveyId,
    /// Also emit zero-vote entries for questions nobody answered, in
    /// question order. Requires the survey to exist.
    pub include_unanswered: bool,
}

pub struct GetSurveyResultsHandler {
    surveys: Arc<dyn SurveyRepository>,
    answers: Arc<dyn AnswerRepository>,
}

impl GetSurveyResultsHandler {
    pub fn new(surveys: Arc<dyn SurveyRepository>, answers: Arc<dyn AnswerRepository>) -> Self {
        Self { surveys, answers }
    }

    /// Without `include_unanswered` an unknown survey yields an empty list.
    pub async fn handle(&self, query: GetSurveyResultsQuery) -> Result<Vec<QuestionResult>, SurveyError> {
        let rows = self.answers.find_by_survey(&query.survey_id).await?;
        let results = aggregate(&rows);
        tracing::debug!(
            survey_id = %query.survey_id,
            rows = rows.len(),
            questions = results.len(),
            "Aggregated survey results"
        );

        if !query.include_unanswered {
            return Ok(results);
        }

        let survey = self
            .surveys
            .find_by_id(&query.survey_id)
            .await?
            .ok_or_else(|| SurveyError::not_found(query.survey_id.clone()))?;

        Ok(with_unanswered(results, survey.questions()))
    }
}
