//! SubmitAnswersHandler - Command handler for completing a survey.
//!
//! Every answer is checked against its question before anything is written;
//! the write itself (answers, completion, participant count, reward) is one
//! unit of work inside the repository.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::answer::{Submission, SubmittedAnswer};
use crate::domain::foundation::{AuthenticatedUser, ErrorCode, SurveyId, Timestamp};
use crate::domain::survey::{Survey, SurveyError};
use crate::ports::{AnswerRepository, SurveyRepository};

/// Command to submit a participant's answers.
#[derive(Debug, Clone)]
pub struct SubmitAnswersCommand {
    pub survey_id: SurveyId,
    pub requested_by: AuthenticatedUser,
    pub answers: Vec<SubmittedAnswer>,
}

/// Outcome of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitAnswersResult {
    pub survey_id: SurveyId,
    pub answers_recorded: usize,
}

pub struct SubmitAnswersHandler {
    surveys: Arc<dyn SurveyRepository>,
    answers: Arc<dyn AnswerRepository>,
}

impl SubmitAnswersHandler {
    pub fn new(surveys: Arc<dyn SurveyRepository>, answers: Arc<dyn AnswerRepository>) -> Self {
        Self { surveys, answers }
    }

    pub async fn handle(&self, cmd: SubmitAnswersCommand) -> Result<SubmitAnswersResult, SurveyError> {
        let user_id = match cmd.requested_by.participant_id() {
            Some(id) => id?,
            None => return Err(SurveyError::forbidden("only participants submit answers")),
        };

        let survey = self
            .surveys
            .find_by_id(&cmd.survey_id)
            .await?
            .ok_or_else(|| SurveyError::not_found(cmd.survey_id.clone()))?;

        let now = Timestamp::now();
        if !survey.accepts_answers(&now) {
            return Err(SurveyError::not_accepting_answers(cmd.survey_id));
        }

        if let Err(e) = check_answers(&survey, &cmd.answers) {
            tracing::warn!(survey_id = %cmd.survey_id, error = %e, "Submission rejected");
            return Err(e);
        }

        if self.answers.has_completed(&user_id, &cmd.survey_id).await? {
            return Err(SurveyError::already_completed(cmd.survey_id));
        }

        let submission = Submission {
            survey_id: cmd.survey_id.clone(),
            user_id,
            answers: cmd.answers,
            submitted_at: now,
        };

        self.answers
            .record_submission(&submission)
            .await
            .map_err(|e| match e.code {
                ErrorCode::AlreadyCompleted => SurveyError::already_completed(cmd.survey_id.clone()),
                ErrorCode::SurveyNotFound => SurveyError::not_found(cmd.survey_id.clone()),
                _ => SurveyError::from(e),
            })?;

        tracing::info!(
            survey_id = %submission.survey_id,
            user = %submission.user_id,
            answers = submission.answers.len(),
            "Survey answers recorded"
        );

        Ok(SubmitAnswersResult {
            survey_id: submission.survey_id,
            answers_recorded: submission.answers.len(),
        })
    }
}

fn check_answers(survey: &Survey, answers: &[SubmittedAnswer]) -> Result<(), SurveyError> {
    if answers.is_empty() {
        return Err(SurveyError::validation("answers", "at least one answer is required"));
    }

    let mut seen = HashSet::new();
    for answer in answers {
        if !seen.insert(&answer.question_id) {
            return Err(SurveyError::invalid_answer(
                answer.question_id.clone(),
                "question answered more than once",
            ));
        }

        let question = survey
            .question(&answer.question_id)
            .ok_or_else(|| SurveyError::question_not_found(answer.question_id.clone()))?;

        answer
            .value
            .validate_against(question)
            .map_err(|e| SurveyError::invalid_answer(answer.question_id.clone(), e.to_string()))?;
    }

    if let Some(missing) = survey.required_questions().find(|q| !seen.contains(q.id())) {
        return Err(SurveyError::missing_required(missing.id().clone()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::in_memory::{InMemorySurveyStore, ParticipantProgress};
    use crate::application::handlers::survey::testing::{
        business, choice_question, participant, sample_survey, survey_with, FailingStore,
    };
    use crate::domain::answer::AnswerValue;
    use crate::domain::foundation::{QuestionId, UserId};
    use crate::domain::survey::QuestionType;

    async fn setup(survey: &Survey) -> (Arc<InMemorySurveyStore>, SubmitAnswersHandler) {
        let store = Arc::new(InMemorySurveyStore::new().with_participant("user_1"));
        store.save(survey).await.unwrap();
        let handler = SubmitAnswersHandler::new(store.clone(), store.clone());
        (store, handler)
    }

    fn answer(question_id: &QuestionId, value: AnswerValue) -> SubmittedAnswer {
        SubmittedAnswer {
            question_id: question_id.clone(),
            value,
        }
    }

    fn full_answers(survey: &Survey) -> Vec<SubmittedAnswer> {
        let q = survey.questions();
        vec![
            answer(q[0].id(), AnswerValue::Label("Yes".into())),
            answer(q[1].id(), AnswerValue::Labels(vec!["A".into(), "C".into()])),
            answer(q[2].id(), AnswerValue::Number(4.0)),
        ]
    }

    fn command(survey: &Survey, answers: Vec<SubmittedAnswer>) -> SubmitAnswersCommand {
        SubmitAnswersCommand {
            survey_id: survey.id().clone(),
            requested_by: participant("user_1"),
            answers,
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Success
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn records_answers_and_rewards_participant() {
        let survey = sample_survey("business_1");
        let (store, handler) = setup(&survey).await;

        let result = handler.handle(command(&survey, full_answers(&survey))).await.unwrap();

        assert_eq!(result.answers_recorded, 3);
        assert_eq!(store.answer_count(), 3);
        assert_eq!(
            store.participant_progress(&UserId::new("user_1").unwrap()),
            Some(ParticipantProgress {
                points: 10,
                surveys_completed: 1
            })
        );
        let stored = store.find_by_id(survey.id()).await.unwrap().unwrap();
        assert_eq!(stored.participant_count(), 1);
    }

    #[tokio::test]
    async fn optional_questions_may_be_skipped() {
        let survey = sample_survey("business_1");
        let (_, handler) = setup(&survey).await;
        let only_required = vec![answer(survey.questions()[0].id(), AnswerValue::Label("No".into()))];

        let result = handler.handle(command(&survey, only_required)).await.unwrap();

        assert_eq!(result.answers_recorded, 1);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Rejections
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn second_submission_is_already_completed() {
        let survey = sample_survey("business_1");
        let (store, handler) = setup(&survey).await;
        handler.handle(command(&survey, full_answers(&survey))).await.unwrap();

        let result = handler.handle(command(&survey, full_answers(&survey))).await;

        assert_eq!(result, Err(SurveyError::already_completed(survey.id().clone())));
        assert_eq!(store.answer_count(), 3);
    }

    #[tokio::test]
    async fn business_cannot_submit() {
        let survey = sample_survey("business_1");
        let (_, handler) = setup(&survey).await;
        let mut cmd = command(&survey, full_answers(&survey));
        cmd.requested_by = business("business_1");

        let result = handler.handle(cmd).await;

        assert!(matches!(result, Err(SurveyError::Forbidden(_))));
    }

    #[tokio::test]
    async fn unknown_survey_is_not_found() {
        let survey = sample_survey("business_1");
        let (_, handler) = setup(&survey).await;
        let mut cmd = command(&survey, full_answers(&survey));
        cmd.survey_id = SurveyId::new("survey_unknown").unwrap();

        let result = handler.handle(cmd).await;

        assert!(matches!(result, Err(SurveyError::NotFound(_))));
    }

    #[tokio::test]
    async fn ended_survey_rejects_answers() {
        let past = Timestamp::now().add_days(-1);
        let survey = survey_with(
            "business_1",
            vec![choice_question(QuestionType::Boolean, &[], true)],
            Some(past),
        );
        let (_, handler) = setup(&survey).await;
        let answers = vec![answer(survey.questions()[0].id(), AnswerValue::Flag(true))];

        let result = handler.handle(command(&survey, answers)).await;

        assert!(matches!(result, Err(SurveyError::NotAcceptingAnswers(_))));
    }

    #[tokio::test]
    async fn empty_submission_is_rejected() {
        let survey = sample_survey("business_1");
        let (_, handler) = setup(&survey).await;

        let result = handler.handle(command(&survey, vec![])).await;

        assert!(matches!(result, Err(SurveyError::ValidationFailed { .. })));
    }

    #[tokio::test]
    async fn unknown_option_is_invalid_answer() {
        let survey = sample_survey("business_1");
        let (store, handler) = setup(&survey).await;
        let answers = vec![answer(survey.questions()[0].id(), AnswerValue::Label("Maybe".into()))];

        let result = handler.handle(command(&survey, answers)).await;

        assert!(matches!(result, Err(SurveyError::InvalidAnswer { .. })));
        assert_eq!(store.answer_count(), 0);
    }

    #[tokio::test]
    async fn out_of_range_scale_is_invalid_answer() {
        let survey = sample_survey("business_1");
        let (_, handler) = setup(&survey).await;
        let q = survey.questions();
        let answers = vec![
            answer(q[0].id(), AnswerValue::Label("Yes".into())),
            answer(q[2].id(), AnswerValue::Number(9.0)),
        ];

        let result = handler.handle(command(&survey, answers)).await;

        match result {
            Err(SurveyError::InvalidAnswer { question_id, .. }) => assert_eq!(&question_id, q[2].id()),
            other => panic!("Expected InvalidAnswer, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn duplicate_question_is_invalid_answer() {
        let survey = sample_survey("business_1");
        let (_, handler) = setup(&survey).await;
        let q0 = survey.questions()[0].id();
        let answers = vec![
            answer(q0, AnswerValue::Label("Yes".into())),
            answer(q0, AnswerValue::Label("No".into())),
        ];

        let result = handler.handle(command(&survey, answers)).await;

        assert!(matches!(result, Err(SurveyError::InvalidAnswer { .. })));
    }

    #[tokio::test]
    async fn foreign_question_is_question_not_found() {
        let survey = sample_survey("business_1");
        let (_, handler) = setup(&survey).await;
        let mut answers = full_answers(&survey);
        answers.push(answer(&QuestionId::new("question_other").unwrap(), AnswerValue::Flag(true)));

        let result = handler.handle(command(&survey, answers)).await;

        assert!(matches!(result, Err(SurveyError::QuestionNotFound(_))));
    }

    #[tokio::test]
    async fn missing_required_answer_is_rejected() {
        let survey = sample_survey("business_1");
        let (_, handler) = setup(&survey).await;
        let q = survey.questions();
        let answers = vec![answer(q[2].id(), AnswerValue::Number(3.0))];

        let result = handler.handle(command(&survey, answers)).await;

        assert_eq!(result, Err(SurveyError::missing_required(q[0].id().clone())));
    }

    #[tokio::test]
    async fn storage_failure_is_infrastructure_error() {
        let survey = sample_survey("business_1");
        let handler = SubmitAnswersHandler::new(Arc::new(FailingStore), Arc::new(FailingStore));

        let result = handler.handle(command(&survey, full_answers(&survey))).await;

        assert!(matches!(result, Err(SurveyError::Infrastructure(_))));
    }
}
