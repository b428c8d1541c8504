//! DeleteSurveyHandler - Command handler for removing a survey.
//!
//! Questions, answers and completions go with it.

use std::sync::Arc;

use crate::domain::foundation::{AuthenticatedUser, ErrorCode, SurveyId};
use crate::domain::survey::SurveyError;
use crate::ports::SurveyRepository;

#[derive(Debug, Clone)]
pub struct DeleteSurveyCommand {
    pub survey_id: SurveyId,
    pub requested_by: AuthenticatedUser,
}

pub struct DeleteSurveyHandler {
    repository: Arc<dyn SurveyRepository>,
}

impl DeleteSurveyHandler {
    pub fn new(repository: Arc<dyn SurveyRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteSurveyCommand) -> Result<(), SurveyError> {
        let survey = self
            .repository
            .find_by_id(&cmd.survey_id)
            .await?
            .ok_or_else(|| SurveyError::not_found(cmd.survey_id.clone()))?;

        if !survey.can_be_deleted_by(&cmd.requested_by) {
            tracing::warn!(
                survey_id = %cmd.survey_id,
                user = %cmd.requested_by.subject,
                "Survey delete denied"
            );
            return Err(SurveyError::forbidden("only the owning business or an admin may delete a survey"));
        }

        self.repository
            .delete(&cmd.survey_id)
            .await
            .map_err(|e| match e.code {
                ErrorCode::SurveyNotFound => SurveyError::not_found(cmd.survey_id.clone()),
                _ => SurveyError::from(e),
            })?;

        tracing::info!(survey_id = %cmd.survey_id, "Survey deleted");
        Ok(())
    }
}
