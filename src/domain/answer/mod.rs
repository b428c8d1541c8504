//! Answer domain module.
//!
//! Answer records as persisted, and the submission a participant sends when
//! completing a survey.

mod value;

pub use value::AnswerValue;

use crate::domain::foundation::{QuestionId, SurveyId, Timestamp, UserId};

/// Points a participant earns for completing a survey.
pub const POINTS_PER_COMPLETION: i32 = 10;

/// One stored answer row.
#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    pub survey_id: SurveyId,
    pub question_id: QuestionId,
    /// Absent for rows whose respondent account was removed.
    pub user_id: Option<UserId>,
    pub value: AnswerValue,
    pub created_at: Timestamp,
}

/// One answer inside a submission.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmittedAnswer {
    pub question_id: QuestionId,
    pub value: AnswerValue,
}

/// A participant's full set of answers to one survey.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub survey_id: SurveyId,
    pub user_id: UserId,
    pub answers: Vec<SubmittedAnswer>,
    pub submitted_at: Timestamp,
}

impl Submission {
    /// Expand into the answer rows to persist.
    pub fn to_answers(&self) -> Vec<Answer> {
        self.answers
            .iter()
            .map(|a| Answer {
                survey_id: self.survey_id.clone(),
                question_id: a.question_id.clone(),
                user_id: Some(self.user_id.clone()),
                value: a.value.clone(),
                created_at: self.submitted_at,
            })
            .collect()
    }
}
