//! PostgreSQL adapters.
//!
//! - `PostgresSurveyRepository` - surveys and questions
//! - `PostgresAnswerRepository` - answers, completions, participant rewards
//! - `PostgresStatsReader` - admin dashboard counts
//! - `PostgresAccountReader` - business and participant profiles

mod account_reader;
mod answer_repository;
mod stats_reader;
mod survey_repository;

pub use account_reader::PostgresAccountReader;
pub use answer_repository::PostgresAnswerRepository;
pub use stats_reader::PostgresStatsReader;
pub use survey_repository::PostgresSurveyRepository;
