//! Question entity.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::QuestionType;
use crate::domain::foundation::{QuestionId, ValidationError};

/// Minimum number of options a choice question must offer.
pub const MIN_CHOICE_OPTIONS: usize = 2;

/// Author input for one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewQuestion {
    pub text: String,
    pub question_type: QuestionType,
    #[serde(default)]
    pub options: Vec<String>,
    pub min: Option<i32>,
    pub max: Option<i32>,
    pub required: bool,
}

/// A question as stored, positioned within its survey.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    id: QuestionId,
    text: String,
    question_type: QuestionType,
    options: Vec<String>,
    min: Option<i32>,
    max: Option<i32>,
    required: bool,
    order: u32,
}

impl Question {
    /// Validate author input and assign a fresh id.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the text is blank
    /// - `InvalidFormat` if a choice question has fewer than two distinct
    ///   options, or a numeric question has `min >= max`
    pub fn create(input: NewQuestion, order: u32) -> Result<Self, ValidationError> {
        let field = |name: &str| format!("questions[{}].{}", order, name);

        let text = input.text.trim().to_string();
        if text.is_empty() {
            return Err(ValidationError::empty_field(field("text")));
        }

        let options: Vec<String> = input
            .options
            .into_iter()
            .map(|o| o.trim().to_string())
            .collect();

        if input.question_type.is_choice() {
            if options.iter().any(|o| o.is_empty()) {
                return Err(ValidationError::empty_field(field("options")));
            }
            let distinct: HashSet<&str> = options.iter().map(String::as_str).collect();
            if distinct.len() != options.len() {
                return Err(ValidationError::invalid_format(
                    field("options"),
                    "options must be unique",
                ));
            }
            if options.len() < MIN_CHOICE_OPTIONS {
                return Err(ValidationError::invalid_format(
                    field("options"),
                    format!("at least {} options required", MIN_CHOICE_OPTIONS),
                ));
            }
        }

        if input.question_type.is_numeric() {
            if let (Some(min), Some(max)) = (input.min, input.max) {
                if min >= max {
                    return Err(ValidationError::invalid_format(
                        field("min"),
                        "min must be lower than max",
                    ));
                }
            }
        }

        Ok(Self {
            id: QuestionId::generate(),
            text,
            question_type: input.question_type,
            options: if input.question_type.is_choice() { options } else { Vec::new() },
            min: input.min.filter(|_| input.question_type.is_numeric()),
            max: input.max.filter(|_| input.question_type.is_numeric()),
            required: input.required,
            order,
        })
    }

    /// Rebuild from persistence without validation.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: QuestionId,
        text: String,
        question_type: QuestionType,
        options: Vec<String>,
        min: Option<i32>,
        max: Option<i32>,
        required: bool,
        order: u32,
    ) -> Self {
        Self {
            id,
            text,
            question_type,
            options,
            min,
            max,
            required,
            order,
        }
    }

    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn question_type(&self) -> QuestionType {
        self.question_type
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn has_option(&self, label: &str) -> bool {
        self.options.iter().any(|o| o == label)
    }

    pub fn min(&self) -> Option<i32> {
        self.min
    }

    pub fn max(&self) -> Option<i32> {
        self.max
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn order(&self) -> u32 {
        self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choice(options: &[&str]) -> NewQuestion {
        NewQuestion {
            text: "Favourite colour?".to_string(),
            question_type: QuestionType::Single,
            options: options.iter().map(|s| s.to_string()).collect(),
            min: None,
            max: None,
            required: true,
        }
    }

    fn scale(min: Option<i32>, max: Option<i32>) -> NewQuestion {
        NewQuestion {
            text: "Rate us".to_string(),
            question_type: QuestionType::Scale,
            options: vec![],
            min,
            max,
            required: false,
        }
    }

    #[test]
    fn creates_choice_question_with_trimmed_options() {
        let q = Question::create(choice(&[" Red ", "Blue"]), 3).unwrap();
        assert_eq!(q.options(), &["Red".to_string(), "Blue".to_string()]);
        assert_eq!(q.order(), 3);
        assert!(q.id().as_str().starts_with("question_"));
        assert!(q.has_option("Red"));
        assert!(!q.has_option("Green"));
    }

    #[test]
    fn blank_text_is_rejected() {
        let mut input = choice(&["A", "B"]);
        input.text = "  ".to_string();
        let err = Question::create(input, 0).unwrap_err();
        assert_eq!(err.field(), "questions[0].text");
    }

    #[test]
    fn choice_question_needs_two_distinct_options() {
        assert!(Question::create(choice(&["Only"]), 0).is_err());
        assert!(Question::create(choice(&["Same", "Same"]), 0).is_err());
        assert!(Question::create(choice(&["A", ""]), 0).is_err());
    }

    #[test]
    fn numeric_bounds_must_be_ordered() {
        assert!(Question::create(scale(Some(1), Some(5)), 0).is_ok());
        assert!(Question::create(scale(Some(5), Some(5)), 0).is_err());
        assert!(Question::create(scale(None, Some(5)), 0).is_ok());
    }

    #[test]
    fn options_and_bounds_are_dropped_for_other_types() {
        let input = NewQuestion {
            text: "Do you agree?".to_string(),
            question_type: QuestionType::Boolean,
            options: vec!["ignored".to_string()],
            min: Some(0),
            max: Some(1),
            required: true,
        };
        let q = Question::create(input, 0).unwrap();
        assert!(q.options().is_empty());
        assert_eq!(q.min(), None);
        assert_eq!(q.max(), None);
    }
}
