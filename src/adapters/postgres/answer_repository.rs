//! PostgreSQL implementation of AnswerRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::domain::answer::{Answer, AnswerValue, Submission, POINTS_PER_COMPLETION};
use crate::domain::foundation::{
    DomainError, ErrorCode, QuestionId, SurveyId, Timestamp, UserId, ValidationError,
};
use crate::ports::AnswerRepository;

const COMPLETION_UNIQUE: &str = "survey_completions_user_survey_key";
const COMPLETION_SURVEY_FK: &str = "survey_completions_survey_id_fkey";

/// PostgreSQL implementation of AnswerRepository.
#[derive(Clone)]
pub struct PostgresAnswerRepository {
    pool: PgPool,
}

impl PostgresAnswerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnswerRepository for PostgresAnswerRepository {
    async fn record_submission(&self, submission: &Submission) -> Result<(), DomainError> {
        let survey_id = submission.survey_id.as_str();
        let user_id = submission.user_id.as_str();

        let mut tx = self.pool.begin().await.map_err(|e| {
            DomainError::database(format!("Failed to begin transaction: {}", e))
        })?;

        // The unique key serializes concurrent submissions by the same participant.
        sqlx::query(
            "INSERT INTO survey_completions (user_id, survey_id, completed_at) VALUES ($1, $2, $3)",
        )
        .bind(user_id)
        .bind(survey_id)
        .bind(submission.submitted_at.as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                match db_err.constraint() {
                    Some(COMPLETION_UNIQUE) => {
                        return DomainError::new(
                            ErrorCode::AlreadyCompleted,
                            format!("Survey {} already completed", survey_id),
                        );
                    }
                    Some(COMPLETION_SURVEY_FK) => {
                        return DomainError::new(
                            ErrorCode::SurveyNotFound,
                            format!("Survey not found: {}", survey_id),
                        );
                    }
                    _ => {}
                }
            }
            DomainError::database(format!("Failed to record completion: {}", e))
        })?;

        for answer in &submission.answers {
            sqlx::query(
                r#"
                INSERT INTO answers (survey_id, question_id, user_id, value, created_at)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(survey_id)
            .bind(answer.question_id.as_str())
            .bind(user_id)
            .bind(Json(Value::from(answer.value.clone())))
            .bind(submission.submitted_at.as_datetime())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database(format!("Failed to insert answer: {}", e)))?;
        }

        sqlx::query(
            r#"
            UPDATE surveys
            SET participant_count = (
                SELECT COUNT(*)::int FROM survey_completions WHERE survey_id = $1
            )
            WHERE id = $1
            "#,
        )
        .bind(survey_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            DomainError::database(format!("Failed to update participant count: {}", e))
        })?;

        // Participants without a profile row simply earn nothing.
        sqlx::query(
            r#"
            UPDATE participants
            SET points = points + $2, surveys_completed = surveys_completed + 1
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .bind(POINTS_PER_COMPLETION)
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::database(format!("Failed to award points: {}", e)))?;

        tx.commit().await.map_err(|e| {
            DomainError::database(format!("Failed to commit transaction: {}", e))
        })?;

        Ok(())
    }

    async fn find_by_survey(&self, survey_id: &SurveyId) -> Result<Vec<Answer>, DomainError> {
        let rows: Vec<AnswerRow> = sqlx::query_as(
            r#"
            SELECT survey_id, question_id, user_id, value, created_at
            FROM answers
            WHERE survey_id = $1
            "#,
        )
        .bind(survey_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch answers: {}", e)))?;

        rows.into_iter().map(Answer::try_from).collect()
    }

    async fn has_completed(&self, user_id: &UserId, survey_id: &SurveyId) -> Result<bool, DomainError> {
        sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM survey_completions WHERE user_id = $1 AND survey_id = $2)",
        )
        .bind(user_id.as_str())
        .bind(survey_id.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to check completion: {}", e)))
    }
}

#[derive(Debug, sqlx::FromRow)]
struct AnswerRow {
    survey_id: String,
    question_id: String,
    user_id: Option<String>,
    value: Json<Value>,
    created_at: DateTime<Utc>,
}

impl TryFrom<AnswerRow> for Answer {
    type Error = DomainError;

    fn try_from(row: AnswerRow) -> Result<Self, Self::Error> {
        let corrupt = |e: ValidationError| DomainError::database(format!("Corrupt answer row: {}", e));
        Ok(Answer {
            survey_id: SurveyId::new(row.survey_id).map_err(corrupt)?,
            question_id: QuestionId::new(row.question_id).map_err(corrupt)?,
            // Blank respondent ids are treated as anonymous.
            user_id: row.user_id.and_then(|id| UserId::new(id).ok()),
            value: AnswerValue::from(row.value.0),
            created_at: Timestamp::from_datetime(row.created_at),
        })
    }
}
