//! Survey results.

mod aggregator;

pub use aggregator::{aggregate, with_unanswered, QuestionResult};
