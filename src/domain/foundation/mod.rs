//! Foundation module - Shared domain primitives.
//!
//! Identifiers, timestamps, auth identity and error types that the survey,
//! answer and results modules build on.

mod auth;
mod errors;
mod ids;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser, Role};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{BusinessId, QuestionId, SurveyId, UserId};
pub use timestamp::Timestamp;
