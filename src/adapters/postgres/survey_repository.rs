//! PostgreSQL implementation of SurveyRepository.

use std::collections::HashMap;
use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{PgPool, Postgres, Transaction};

use crate::domain::foundation::{
    BusinessId, DomainError, ErrorCode, QuestionId, SurveyId, Timestamp, ValidationError,
};
use crate::domain::survey::{Question, Survey};
use crate::ports::SurveyRepository;

const SELECT_SURVEYS: &str = r#"
    SELECT id, title, description, category, creator_type, creator_name,
           participant_count, is_public, is_trending, created_at, ends_at,
           image_url, status, privacy, business_id, cost_credits
    FROM surveys
"#;

const SELECT_QUESTIONS: &str = r#"
    SELECT id, survey_id, text, question_type, options, min_value, max_value,
           required, position
    FROM questions
"#;

/// PostgreSQL implementation of SurveyRepository.
#[derive(Clone)]
pub struct PostgresSurveyRepository {
    pool: PgPool,
}

impl PostgresSurveyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load the questions of every survey row in one query and assemble aggregates.
    async fn with_questions(&self, rows: Vec<SurveyRow>) -> Result<Vec<Survey>, DomainError> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<String> = rows.iter().map(|r| r.id.clone()).collect();
        let question_rows: Vec<QuestionRow> = sqlx::query_as(&format!(
            "{} WHERE survey_id = ANY($1) ORDER BY survey_id, position",
            SELECT_QUESTIONS
        ))
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch questions: {}", e)))?;

        let mut by_survey: HashMap<String, Vec<Question>> = HashMap::new();
        for row in question_rows {
            let survey_id = row.survey_id.clone();
            by_survey
                .entry(survey_id)
                .or_default()
                .push(Question::try_from(row)?);
        }

        rows.into_iter()
            .map(|row| {
                let questions = by_survey.remove(&row.id).unwrap_or_default();
                row.into_survey(questions)
            })
            .collect()
    }
}

#[async_trait]
impl SurveyRepository for PostgresSurveyRepository {
    async fn save(&self, survey: &Survey) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            DomainError::database(format!("Failed to begin transaction: {}", e))
        })?;

        sqlx::query(
            r#"
            INSERT INTO surveys (
                id, title, description, category, creator_type, creator_name,
                participant_count, is_public, is_trending, created_at, ends_at,
                image_url, status, privacy, business_id, cost_credits
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            "#,
        )
        .bind(survey.id().as_str())
        .bind(survey.title())
        .bind(survey.description())
        .bind(survey.category().as_str())
        .bind(survey.creator_type().as_str())
        .bind(survey.creator_name())
        .bind(i32::try_from(survey.participant_count()).unwrap_or(i32::MAX))
        .bind(survey.is_public())
        .bind(survey.is_trending())
        .bind(survey.created_at().as_datetime())
        .bind(survey.ends_at().map(|t| *t.as_datetime()))
        .bind(survey.image_url())
        .bind(survey.status().as_str())
        .bind(survey.privacy().as_str())
        .bind(survey.business_id().map(|id| id.as_str()))
        .bind(survey.cost_credits())
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert survey: {}", e)))?;

        for question in survey.questions() {
            insert_question(&mut tx, survey.id(), question).await?;
        }

        tx.commit().await.map_err(|e| {
            DomainError::database(format!("Failed to commit transaction: {}", e))
        })?;

        Ok(())
    }

    async fn find_by_id(&self, id: &SurveyId) -> Result<Option<Survey>, DomainError> {
        let row: Option<SurveyRow> = sqlx::query_as(&format!("{} WHERE id = $1", SELECT_SURVEYS))
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to fetch survey: {}", e)))?;

        match row {
            Some(row) => Ok(self.with_questions(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn list_all(&self) -> Result<Vec<Survey>, DomainError> {
        let rows: Vec<SurveyRow> =
            sqlx::query_as(&format!("{} ORDER BY created_at DESC", SELECT_SURVEYS))
                .fetch_all(&self.pool)
                .await
                .map_err(|e| DomainError::database(format!("Failed to list surveys: {}", e)))?;

        self.with_questions(rows).await
    }

    async fn list_by_business(&self, business_id: &BusinessId) -> Result<Vec<Survey>, DomainError> {
        let rows: Vec<SurveyRow> = sqlx::query_as(&format!(
            "{} WHERE business_id = $1 ORDER BY created_at DESC",
            SELECT_SURVEYS
        ))
        .bind(business_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::database(format!("Failed to list surveys by business: {}", e))
        })?;

        self.with_questions(rows).await
    }

    async fn delete(&self, id: &SurveyId) -> Result<(), DomainError> {
        // Questions, answers and completions cascade.
        let result = sqlx::query("DELETE FROM surveys WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete survey: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::SurveyNotFound,
                format!("Survey not found: {}", id),
            ));
        }

        Ok(())
    }
}

async fn insert_question(
    tx: &mut Transaction<'_, Postgres>,
    survey_id: &SurveyId,
    question: &Question,
) -> Result<(), DomainError> {
    sqlx::query(
        r#"
        INSERT INTO questions (
            id, survey_id, text, question_type, options, min_value, max_value,
            required, position
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        "#,
    )
    .bind(question.id().as_str())
    .bind(survey_id.as_str())
    .bind(question.text())
    .bind(question.question_type().as_str())
    .bind(Json(question.options()))
    .bind(question.min())
    .bind(question.max())
    .bind(question.is_required())
    .bind(i32::try_from(question.order()).unwrap_or(i32::MAX))
    .execute(&mut **tx)
    .await
    .map_err(|e| DomainError::database(format!("Failed to insert question: {}", e)))?;

    Ok(())
}

// ════════════════════════════════════════════════════════════════════════════
// Row types
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, sqlx::FromRow)]
struct SurveyRow {
    id: String,
    title: String,
    description: String,
    category: String,
    creator_type: String,
    creator_name: String,
    participant_count: i32,
    is_public: bool,
    is_trending: bool,
    created_at: DateTime<Utc>,
    ends_at: Option<DateTime<Utc>>,
    image_url: Option<String>,
    status: String,
    privacy: String,
    business_id: Option<String>,
    cost_credits: i32,
}

impl SurveyRow {
    fn into_survey(self, questions: Vec<Question>) -> Result<Survey, DomainError> {
        Ok(Survey::reconstitute(
            SurveyId::new(self.id).map_err(corrupt_row)?,
            self.title,
            self.description,
            parse_column(&self.category)?,
            parse_column(&self.creator_type)?,
            self.creator_name,
            u32::try_from(self.participant_count).unwrap_or(0),
            self.is_public,
            self.is_trending,
            Timestamp::from_datetime(self.created_at),
            self.ends_at.map(Timestamp::from_datetime),
            self.image_url,
            parse_column(&self.status)?,
            parse_column(&self.privacy)?,
            self.business_id
                .map(BusinessId::new)
                .transpose()
                .map_err(corrupt_row)?,
            self.cost_credits,
            questions,
        ))
    }
}

#[derive(Debug, sqlx::FromRow)]
struct QuestionRow {
    id: String,
    survey_id: String,
    text: String,
    question_type: String,
    options: Json<Vec<String>>,
    min_value: Option<i32>,
    max_value: Option<i32>,
    required: bool,
    position: i32,
}

impl TryFrom<QuestionRow> for Question {
    type Error = DomainError;

    fn try_from(row: QuestionRow) -> Result<Self, Self::Error> {
        Ok(Question::reconstitute(
            QuestionId::new(row.id).map_err(corrupt_row)?,
            row.text,
            parse_column(&row.question_type)?,
            row.options.0,
            row.min_value,
            row.max_value,
            row.required,
            u32::try_from(row.position).unwrap_or(0),
        ))
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn parse_column<T>(value: &str) -> Result<T, DomainError>
where
    T: FromStr<Err = ValidationError>,
{
    value.parse().map_err(corrupt_row)
}

fn corrupt_row(err: ValidationError) -> DomainError {
    DomainError::database(format!("Corrupt survey row: {}", err))
}
