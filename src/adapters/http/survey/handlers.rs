//! HTTP handlers for survey endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::{
    CreateSurveyCommand, CreateSurveyHandler, DeleteSurveyCommand, DeleteSurveyHandler,
    GetBusinessSurveysHandler, GetBusinessSurveysQuery, GetSurveyHandler, GetSurveyQuery,
    GetSurveyResultsHandler, GetSurveyResultsQuery, ListSurveysHandler, SubmitAnswersCommand,
    SubmitAnswersHandler,
};
use crate::domain::answer::SubmittedAnswer;
use crate::domain::foundation::{BusinessId, SurveyId, Timestamp};
use crate::domain::survey::SurveyError;
use crate::ports::{AnswerRepository, SurveyRepository};

use super::dto::{
    CreateSurveyRequest, DeleteSurveyResponse, ResultsParams, SubmitAnswersRequest,
    SubmitAnswersResponse, SurveyResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════

/// Shared state for survey routes; handlers are built per request.
#[derive(Clone)]
pub struct SurveyAppState {
    pub surveys: Arc<dyn SurveyRepository>,
    pub answers: Arc<dyn AnswerRepository>,
}

impl SurveyAppState {
    pub fn new(surveys: Arc<dyn SurveyRepository>, answers: Arc<dyn AnswerRepository>) -> Self {
        Self { surveys, answers }
    }

    fn create_handler(&self) -> CreateSurveyHandler {
        CreateSurveyHandler::new(self.surveys.clone())
    }

    fn get_handler(&self) -> GetSurveyHandler {
        GetSurveyHandler::new(self.surveys.clone())
    }

    fn list_handler(&self) -> ListSurveysHandler {
        ListSurveysHandler::new(self.surveys.clone())
    }

    fn delete_handler(&self) -> DeleteSurveyHandler {
        DeleteSurveyHandler::new(self.surveys.clone())
    }

    fn submit_handler(&self) -> SubmitAnswersHandler {
        SubmitAnswersHandler::new(self.surveys.clone(), self.answers.clone())
    }

    fn results_handler(&self) -> GetSurveyResultsHandler {
        GetSurveyResultsHandler::new(self.surveys.clone(), self.answers.clone())
    }

    fn business_surveys_handler(&self) -> GetBusinessSurveysHandler {
        GetBusinessSurveysHandler::new(self.surveys.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/surveys
pub async fn list_surveys(State(state): State<SurveyAppState>) -> Result<Response, SurveyApiError> {
    let surveys = state.list_handler().handle().await?;
    let body: Vec<SurveyResponse> = surveys.iter().map(SurveyResponse::from).collect();
    Ok(Json(body).into_response())
}

/// POST /api/surveys
pub async fn create_survey(
    State(state): State<SurveyAppState>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<CreateSurveyRequest>,
) -> Result<Response, SurveyApiError> {
    let cmd = CreateSurveyCommand {
        requested_by: user,
        title: req.title,
        description: req.description,
        category: req.category,
        creator_name: req.creator_name,
        is_public: req.is_public,
        ends_at: req.ends_at.map(Timestamp::from),
        image_url: req.image_url,
        questions: req.questions.into_iter().map(Into::into).collect(),
    };

    let survey = state.create_handler().handle(cmd).await?;
    Ok((StatusCode::CREATED, Json(SurveyResponse::from(&survey))).into_response())
}

/// GET /api/surveys/:id
pub async fn get_survey(
    State(state): State<SurveyAppState>,
    Path(survey_id): Path<String>,
) -> Result<Response, SurveyApiError> {
    let survey_id = parse_survey_id(survey_id)?;
    let survey = state.get_handler().handle(GetSurveyQuery { survey_id }).await?;
    Ok(Json(SurveyResponse::from(&survey)).into_response())
}

/// DELETE /api/surveys/:id
pub async fn delete_survey(
    State(state): State<SurveyAppState>,
    RequireAuth(user): RequireAuth,
    Path(survey_id): Path<String>,
) -> Result<Response, SurveyApiError> {
    let cmd = DeleteSurveyCommand {
        survey_id: parse_survey_id(survey_id)?,
        requested_by: user,
    };
    state.delete_handler().handle(cmd).await?;
    Ok(Json(DeleteSurveyResponse { success: true }).into_response())
}

/// POST /api/surveys/:id/answers
pub async fn submit_answers(
    State(state): State<SurveyAppState>,
    RequireAuth(user): RequireAuth,
    Path(survey_id): Path<String>,
    Json(req): Json<SubmitAnswersRequest>,
) -> Result<Response, SurveyApiError> {
    let answers = req
        .answers
        .into_iter()
        .map(SubmittedAnswer::try_from)
        .collect::<Result<Vec<_>, _>>()
        .map_err(SurveyError::from)?;

    let cmd = SubmitAnswersCommand {
        survey_id: parse_survey_id(survey_id)?,
        requested_by: user,
        answers,
    };

    let result = state.submit_handler().handle(cmd).await?;
    Ok((StatusCode::CREATED, Json(SubmitAnswersResponse::from(result))).into_response())
}

/// GET /api/surveys/:id/results
pub async fn get_survey_results(
    State(state): State<SurveyAppState>,
    Path(survey_id): Path<String>,
    Query(params): Query<ResultsParams>,
) -> Result<Response, SurveyApiError> {
    let query = GetSurveyResultsQuery {
        survey_id: parse_survey_id(survey_id)?,
        include_unanswered: params.include_unanswered,
    };
    let results = state.results_handler().handle(query).await?;
    Ok(Json(results).into_response())
}

/// GET /api/business/:business_id/surveys
pub async fn get_business_surveys(
    State(state): State<SurveyAppState>,
    Path(business_id): Path<String>,
) -> Result<Response, SurveyApiError> {
    let business_id = BusinessId::new(business_id).map_err(SurveyError::from)?;
    let surveys = state
        .business_surveys_handler()
        .handle(GetBusinessSurveysQuery { business_id })
        .await?;
    let body: Vec<SurveyResponse> = surveys.iter().map(SurveyResponse::from).collect();
    Ok(Json(body).into_response())
}

fn parse_survey_id(raw: String) -> Result<SurveyId, SurveyApiError> {
    SurveyId::new(raw).map_err(|e| SurveyApiError(SurveyError::from(e)))
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

/// HTTP wrapper around `SurveyError`.
#[derive(Debug)]
pub struct SurveyApiError(pub SurveyError);

impl From<SurveyError> for SurveyApiError {
    fn from(err: SurveyError) -> Self {
        Self(err)
    }
}

impl SurveyApiError {
    fn status(&self) -> StatusCode {
        match &self.0 {
            SurveyError::NotFound(_) | SurveyError::QuestionNotFound(_) => StatusCode::NOT_FOUND,
            SurveyError::AlreadyCompleted(_) | SurveyError::NotAcceptingAnswers(_) => {
                StatusCode::CONFLICT
            }
            SurveyError::InvalidAnswer { .. }
            | SurveyError::MissingRequiredAnswer(_)
            | SurveyError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
            SurveyError::Forbidden(_) => StatusCode::FORBIDDEN,
            SurveyError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for SurveyApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self.0 {
            SurveyError::Infrastructure(msg) => {
                tracing::error!(error = %msg, "Survey request failed");
                ErrorResponse::internal()
            }
            SurveyError::ValidationFailed { field, .. } => {
                ErrorResponse::new(self.0.code().to_string(), self.0.message())
                    .with_details(serde_json::json!({ "field": field }))
            }
            SurveyError::InvalidAnswer { question_id, .. }
            | SurveyError::MissingRequiredAnswer(question_id)
            | SurveyError::QuestionNotFound(question_id) => {
                ErrorResponse::new(self.0.code().to_string(), self.0.message())
                    .with_details(serde_json::json!({ "questionId": question_id.as_str() }))
            }
            other => ErrorResponse::new(other.code().to_string(), other.message()),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::QuestionId;

    fn status_of(err: SurveyError) -> StatusCode {
        SurveyApiError(err).into_response().status()
    }

    fn survey_id() -> SurveyId {
        SurveyId::new("survey_1").unwrap()
    }

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(status_of(SurveyError::not_found(survey_id())), StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(SurveyError::question_not_found(QuestionId::new("q").unwrap())),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn completion_conflicts_map_to_409() {
        assert_eq!(status_of(SurveyError::already_completed(survey_id())), StatusCode::CONFLICT);
        assert_eq!(status_of(SurveyError::not_accepting_answers(survey_id())), StatusCode::CONFLICT);
    }

    #[test]
    fn invalid_input_maps_to_400() {
        assert_eq!(status_of(SurveyError::validation("title", "empty")), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(SurveyError::invalid_answer(QuestionId::new("q").unwrap(), "bad")),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn forbidden_maps_to_403() {
        assert_eq!(status_of(SurveyError::forbidden("no")), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn infrastructure_error_hides_details() {
        let response = SurveyApiError(SurveyError::infrastructure("password=hunter2")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["errorCode"], "INTERNAL_ERROR");
        assert!(!json.to_string().contains("hunter2"));
    }

    #[tokio::test]
    async fn answer_errors_carry_question_id() {
        let err = SurveyError::missing_required(QuestionId::new("question_9").unwrap());
        let body = axum::body::to_bytes(SurveyApiError(err).into_response().into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["errorCode"], "VALIDATION_FAILED");
        assert_eq!(json["details"]["questionId"], "question_9");
    }
}
