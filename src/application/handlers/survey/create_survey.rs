//! CreateSurveyHandler - Command handler for authoring surveys.

use std::sync::Arc;

use crate::domain::foundation::{AuthenticatedUser, Role, Timestamp};
use crate::domain::survey::{
    CreatorType, NewQuestion, NewSurvey, Survey, SurveyCategory, SurveyError,
};
use crate::ports::SurveyRepository;

/// Command to create a survey.
#[derive(Debug, Clone)]
pub struct CreateSurveyCommand {
    pub requested_by: AuthenticatedUser,
    pub title: String,
    pub description: String,
    pub category: SurveyCategory,
    pub creator_name: String,
    pub is_public: bool,
    pub ends_at: Option<Timestamp>,
    pub image_url: Option<String>,
    pub questions: Vec<NewQuestion>,
}

/// Handler for creating surveys.
///
/// Businesses create surveys bound to their own account; admins create
/// platform surveys. Participants cannot author surveys.
pub struct CreateSurveyHandler {
    repository: Arc<dyn SurveyRepository>,
}

impl CreateSurveyHandler {
    pub fn new(repository: Arc<dyn SurveyRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateSurveyCommand) -> Result<Survey, SurveyError> {
        let (creator_type, business_id) = match cmd.requested_by.role {
            Role::Admin => (CreatorType::Admin, None),
            Role::Business => {
                let business_id = cmd
                    .requested_by
                    .business_id()
                    .transpose()?;
                (CreatorType::Business, business_id)
            }
            Role::Participant => {
                tracing::warn!(user = %cmd.requested_by.subject, "Participant tried to create a survey");
                return Err(SurveyError::forbidden("only businesses and admins create surveys"));
            }
        };

        let survey = Survey::create(
            NewSurvey {
                title: cmd.title,
                description: cmd.description,
                category: cmd.category,
                creator_type,
                creator_name: cmd.creator_name,
                is_public: cmd.is_public,
                ends_at: cmd.ends_at,
                image_url: cmd.image_url,
                business_id,
                questions: cmd.questions,
            },
            Timestamp::now(),
        )?;

        self.repository.save(&survey).await?;

        tracing::info!(
            survey_id = %survey.id(),
            questions = survey.questions().len(),
            "Survey created"
        );

        Ok(survey)
    }
}
