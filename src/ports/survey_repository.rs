//! Survey repository port.
//!
//! Persists `Survey` aggregates together with their ordered questions.

use crate::domain::foundation::{BusinessId, DomainError, SurveyId};
use crate::domain::survey::Survey;
use async_trait::async_trait;

/// Repository port for Survey aggregate persistence.
#[async_trait]
pub trait SurveyRepository: Send + Sync {
    /// Insert a new survey and its questions.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, survey: &Survey) -> Result<(), DomainError>;

    /// Find a survey by id, questions included.
    async fn find_by_id(&self, id: &SurveyId) -> Result<Option<Survey>, DomainError>;

    /// All surveys, newest first.
    async fn list_all(&self) -> Result<Vec<Survey>, DomainError>;

    /// Surveys owned by one business, newest first.
    async fn list_by_business(&self, business_id: &BusinessId) -> Result<Vec<Survey>, DomainError>;

    /// Delete a survey with its questions, answers and completions.
    ///
    /// # Errors
    ///
    /// - `SurveyNotFound` if the survey doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &SurveyId) -> Result<(), DomainError>;
}
