//! Survey-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, QuestionId, SurveyId, ValidationError};

/// Errors raised by survey commands and queries.
#[derive(Debug, Clone, PartialEq)]
pub enum SurveyError {
    /// Survey was not found.
    NotFound(SurveyId),
    /// An answer referenced a question the survey does not have.
    QuestionNotFound(QuestionId),
    /// Survey is not active or its end date has passed.
    NotAcceptingAnswers(SurveyId),
    /// Participant already submitted this survey.
    AlreadyCompleted(SurveyId),
    /// An answer value does not fit its question.
    InvalidAnswer { question_id: QuestionId, reason: String },
    /// A required question was left unanswered.
    MissingRequiredAnswer(QuestionId),
    /// Input validation failed.
    ValidationFailed { field: String, message: String },
    /// Caller may not perform this action.
    Forbidden(String),
    /// Infrastructure error.
    Infrastructure(String),
}

impl SurveyError {
    pub fn not_found(id: SurveyId) -> Self {
        SurveyError::NotFound(id)
    }
    pub fn question_not_found(id: QuestionId) -> Self {
        SurveyError::QuestionNotFound(id)
    }
    pub fn not_accepting_answers(id: SurveyId) -> Self {
        SurveyError::NotAcceptingAnswers(id)
    }
    pub fn already_completed(id: SurveyId) -> Self {
        SurveyError::AlreadyCompleted(id)
    }
    pub fn invalid_answer(question_id: QuestionId, reason: impl Into<String>) -> Self {
        SurveyError::InvalidAnswer {
            question_id,
            reason: reason.into(),
        }
    }
    pub fn missing_required(id: QuestionId) -> Self {
        SurveyError::MissingRequiredAnswer(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        SurveyError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn forbidden(message: impl Into<String>) -> Self {
        SurveyError::Forbidden(message.into())
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        SurveyError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SurveyError::NotFound(_) => ErrorCode::SurveyNotFound,
            SurveyError::QuestionNotFound(_) => ErrorCode::QuestionNotFound,
            SurveyError::NotAcceptingAnswers(_) => ErrorCode::SurveyClosed,
            SurveyError::AlreadyCompleted(_) => ErrorCode::AlreadyCompleted,
            SurveyError::InvalidAnswer { .. } => ErrorCode::ValidationFailed,
            SurveyError::MissingRequiredAnswer(_) => ErrorCode::ValidationFailed,
            SurveyError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            SurveyError::Forbidden(_) => ErrorCode::Forbidden,
            SurveyError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            SurveyError::NotFound(id) => format!("Survey not found: {}", id),
            SurveyError::QuestionNotFound(id) => {
                format!("Question {} does not belong to this survey", id)
            }
            SurveyError::NotAcceptingAnswers(id) => {
                format!("Survey {} is not accepting answers", id)
            }
            SurveyError::AlreadyCompleted(id) => format!("Survey {} already completed", id),
            SurveyError::InvalidAnswer {
                question_id,
                reason,
            } => format!("Invalid answer for question {}: {}", question_id, reason),
            SurveyError::MissingRequiredAnswer(id) => {
                format!("Question {} requires an answer", id)
            }
            SurveyError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            SurveyError::Forbidden(msg) => format!("Permission denied: {}", msg),
            SurveyError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for SurveyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SurveyError {}

impl From<ValidationError> for SurveyError {
    fn from(err: ValidationError) -> Self {
        SurveyError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for SurveyError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Forbidden | ErrorCode::Unauthorized => SurveyError::Forbidden(err.message),
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => SurveyError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => SurveyError::Infrastructure(err.to_string()),
        }
    }
}
