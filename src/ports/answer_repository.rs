//! Answer repository port.
//!
//! Owns answer rows and survey completions. The aggregator reads the full
//! answer set through `find_by_survey`.

use crate::domain::answer::{Answer, Submission};
use crate::domain::foundation::{DomainError, SurveyId, UserId};
use async_trait::async_trait;

/// Repository port for answers and completions.
#[async_trait]
pub trait AnswerRepository: Send + Sync {
    /// Persist a submission as one unit of work.
    ///
    /// Implementations must, atomically:
    /// - insert one answer row per submitted answer
    /// - insert the (participant, survey) completion
    /// - set the survey's participant count to its number of completions
    /// - award the participant `POINTS_PER_COMPLETION` points and one
    ///   completed survey, if the participant has a profile
    ///
    /// # Errors
    ///
    /// - `AlreadyCompleted` if the participant already completed the survey
    /// - `SurveyNotFound` if the survey vanished
    /// - `DatabaseError` on persistence failure
    async fn record_submission(&self, submission: &Submission) -> Result<(), DomainError>;

    /// Every answer row stored for the survey, in no particular order.
    async fn find_by_survey(&self, survey_id: &SurveyId) -> Result<Vec<Answer>, DomainError>;

    /// Whether the participant already completed the survey.
    async fn has_completed(&self, user_id: &UserId, survey_id: &SurveyId) -> Result<bool, DomainError>;
}
