//! Ports - Interfaces for external dependencies.
//!
//! Application handlers depend on these traits only; adapters in
//! `crate::adapters` implement them for PostgreSQL, memory and JWT.
//!
//! - `SurveyRepository` - surveys and their questions
//! - `AccountReader` - business and participant profiles
//! - `AnswerRepository` - answer rows, completions, participant rewards
//! - `StatsReader` - admin dashboard counts
//! - `SessionValidator` - bearer token validation

mod account_reader;
mod answer_repository;
mod session_validator;
mod stats_reader;
mod survey_repository;

pub use account_reader::{AccountReader, BusinessProfile, ParticipantProfile};
pub use answer_repository::AnswerRepository;
pub use session_validator::SessionValidator;
pub use stats_reader::{AdminStats, StatsReader};
pub use survey_repository::SurveyRepository;
