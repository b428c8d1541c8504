//! Survey command and query handlers.

mod create_survey;
mod delete_survey;
mod get_business_surveys;
mod get_survey;
mod get_survey_results;
mod list_surveys;
mod submit_answers;

#[cfg(test)]
pub(crate) mod testing;

pub use create_survey::{CreateSurveyCommand, CreateSurveyHandler};
pub use delete_survey::{DeleteSurveyCommand, DeleteSurveyHandler};
pub use get_business_surveys::{GetBusinessSurveysHandler, GetBusinessSurveysQuery};
pub use get_survey::{GetSurveyHandler, GetSurveyQuery};
pub use get_survey_results::{GetSurveyResultsHandler, GetSurveyResultsQuery};
pub use list_surveys::ListSurveysHandler;
pub use submit_answers::{SubmitAnswersCommand, SubmitAnswersHandler, SubmitAnswersResult};
