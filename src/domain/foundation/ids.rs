//! Strongly-typed identifier value objects.
//!
//! Identifiers are opaque strings. Server-generated ids take the form
//! `<prefix>_<uuid simple>`; ids issued elsewhere (token subjects, ids
//! created by older clients) are accepted as-is provided they are non-empty.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::ValidationError;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Wraps an existing identifier, rejecting blank input.
            pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
                let id = id.into();
                if id.trim().is_empty() {
                    return Err(ValidationError::empty_field($field));
                }
                Ok(Self(id))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
    ($(#[$meta:meta])* $name:ident, $field:literal, prefix = $prefix:literal) => {
        string_id!($(#[$meta])* $name, $field);

        impl $name {
            /// Generates a fresh server-side identifier.
            pub fn generate() -> Self {
                Self(format!("{}_{}", $prefix, Uuid::new_v4().simple()))
            }
        }
    };
}

string_id!(
    /// Identifier of a survey.
    SurveyId,
    "survey_id",
    prefix = "survey"
);

string_id!(
    /// Identifier of a question within a survey.
    QuestionId,
    "question_id",
    prefix = "question"
);

string_id!(
    /// Identifier of a participant, taken from the token subject.
    UserId,
    "user_id"
);

string_id!(
    /// Identifier of a business account.
    BusinessId,
    "business_id"
);
