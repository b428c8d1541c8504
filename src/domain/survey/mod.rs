//! Survey domain module.
//!
//! Survey authoring rules: what a valid survey and question look like, when a
//! survey accepts answers, and who may delete it.

mod aggregate;
mod enums;
mod errors;
mod question;

pub use aggregate::{NewSurvey, Survey};
pub use enums::{CreatorType, QuestionType, SurveyCategory, SurveyPrivacy, SurveyStatus};
pub use errors::SurveyError;
pub use question::{NewQuestion, Question, MIN_CHOICE_OPTIONS};
