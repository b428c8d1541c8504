//! Axum routes for survey endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    create_survey, delete_survey, get_business_surveys, get_survey, get_survey_results,
    list_surveys, submit_answers, SurveyAppState,
};

/// Survey routes, mounted under `/api`.
///
/// - `GET /surveys` - list surveys (public)
/// - `POST /surveys` - create a survey (business or admin)
/// - `GET /surveys/:id` - get one survey (public)
/// - `DELETE /surveys/:id` - delete (owning business or admin)
/// - `POST /surveys/:id/answers` - submit answers (participant)
/// - `GET /surveys/:id/results` - aggregated results (public)
/// - `GET /business/:business_id/surveys` - a business's surveys (public)
pub fn survey_routes() -> Router<SurveyAppState> {
    Router::new()
        .route("/surveys", get(list_surveys).post(create_survey))
        .route("/surveys/:id", get(get_survey).delete(delete_survey))
        .route("/surveys/:id/answers", post(submit_answers))
        .route("/surveys/:id/results", get(get_survey_results))
        .route("/business/:business_id/surveys", get(get_business_surveys))
}
