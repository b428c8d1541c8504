//! HTTP adapter for survey endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AnswerRequest, CreateSurveyRequest, QuestionRequest, QuestionResponse, SubmitAnswersRequest,
    SubmitAnswersResponse, SurveyResponse,
};
pub use handlers::{SurveyApiError, SurveyAppState};
pub use routes::survey_routes;
