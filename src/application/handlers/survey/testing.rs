//! Shared fixtures and failing port doubles for survey handler tests.

use std::sync::Arc;

use async_trait::async_trait;

use crate::adapters::in_memory::InMemorySurveyStore;
use crate::domain::answer::{Answer, Submission};
use crate::domain::foundation::{
    AuthenticatedUser, BusinessId, DomainError, Role, SurveyId, Timestamp, UserId,
};
use crate::domain::survey::{
    CreatorType, NewQuestion, NewSurvey, QuestionType, Survey, SurveyCategory,
};
use crate::ports::{AnswerRepository, SurveyRepository};

pub fn participant(id: &str) -> AuthenticatedUser {
    AuthenticatedUser::new(id, None, Role::Participant)
}

pub fn business(id: &str) -> AuthenticatedUser {
    AuthenticatedUser::new(id, None, Role::Business)
}

pub fn admin() -> AuthenticatedUser {
    AuthenticatedUser::new("admin_1", None, Role::Admin)
}

pub fn choice_question(question_type: QuestionType, options: &[&str], required: bool) -> NewQuestion {
    NewQuestion {
        text: "Which one?".to_string(),
        question_type,
        options: options.iter().map(|s| s.to_string()).collect(),
        min: None,
        max: None,
        required,
    }
}

pub fn scale_question(min: i32, max: i32, required: bool) -> NewQuestion {
    NewQuestion {
        text: "How much?".to_string(),
        question_type: QuestionType::Scale,
        options: vec![],
        min: Some(min),
        max: Some(max),
        required,
    }
}

/// Business survey with a required single choice, an optional multi-select
/// and an optional 1..5 scale.
pub fn sample_survey(business_id: &str) -> Survey {
    survey_with(
        business_id,
        vec![
            choice_question(QuestionType::Single, &["Yes", "No"], true),
            choice_question(QuestionType::Multiple, &["A", "B", "C"], false),
            scale_question(1, 5, false),
        ],
        None,
    )
}

pub fn survey_with(business_id: &str, questions: Vec<NewQuestion>, ends_at: Option<Timestamp>) -> Survey {
    Survey::create(
        NewSurvey {
            title: "Sample".to_string(),
            description: "A survey".to_string(),
            category: SurveyCategory::Business,
            creator_type: CreatorType::Business,
            creator_name: "Sample Shop".to_string(),
            is_public: true,
            ends_at,
            image_url: None,
            business_id: Some(BusinessId::new(business_id).unwrap()),
            questions,
        },
        Timestamp::now(),
    )
    .unwrap()
}

/// Store seeded with one survey.
pub async fn store_with(survey: &Survey) -> Arc<InMemorySurveyStore> {
    let store = Arc::new(InMemorySurveyStore::new());
    store.save(survey).await.unwrap();
    store
}

/// Every call fails with a database error.
pub struct FailingStore;

fn failure() -> DomainError {
    DomainError::database("Simulated database failure")
}

#[async_trait]
impl SurveyRepository for FailingStore {
    async fn save(&self, _survey: &Survey) -> Result<(), DomainError> {
        Err(failure())
    }

    async fn find_by_id(&self, _id: &SurveyId) -> Result<Option<Survey>, DomainError> {
        Err(failure())
    }

    async fn list_all(&self) -> Result<Vec<Survey>, DomainError> {
        Err(failure())
    }

    async fn list_by_business(&self, _business_id: &BusinessId) -> Result<Vec<Survey>, DomainError> {
        Err(failure())
    }

    async fn delete(&self, _id: &SurveyId) -> Result<(), DomainError> {
        Err(failure())
    }
}

#[async_trait]
impl AnswerRepository for FailingStore {
    async fn record_submission(&self, _submission: &Submission) -> Result<(), DomainError> {
        Err(failure())
    }

    async fn find_by_survey(&self, _survey_id: &SurveyId) -> Result<Vec<Answer>, DomainError> {
        Err(failure())
    }

    async fn has_completed(&self, _user_id: &UserId, _survey_id: &SurveyId) -> Result<bool, DomainError> {
        Err(failure())
    }
}
