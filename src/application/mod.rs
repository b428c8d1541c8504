//! Application layer - Commands, Queries, and Handlers.
//!
//! Handlers orchestrate domain operations over ports. Commands write,
//! queries read.

pub mod handlers;

pub use handlers::admin::{
    AdminError, GetAdminStatsHandler, GetAdminStatsQuery, ListBusinessesHandler,
    ListBusinessesQuery, ListParticipantsHandler, ListParticipantsQuery,
};
pub use handlers::business::{BusinessError, GetBusinessProfileHandler, GetBusinessProfileQuery};
pub use handlers::survey::{
    CreateSurveyCommand, CreateSurveyHandler, DeleteSurveyCommand, DeleteSurveyHandler,
    GetBusinessSurveysHandler, GetBusinessSurveysQuery, GetSurveyHandler, GetSurveyQuery,
    GetSurveyResultsHandler, GetSurveyResultsQuery, ListSurveysHandler, SubmitAnswersCommand,
    SubmitAnswersHandler, SubmitAnswersResult,
};
