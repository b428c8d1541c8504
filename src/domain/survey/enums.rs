//! Closed vocabularies used by surveys and questions.
//!
//! Each enum serializes to the exact label the mobile client and the
//! database use, and parses back from it with `FromStr`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

macro_rules! labelled_enum {
    ($(#[$meta:meta])* $name:ident, $field:literal { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok($name::$variant),)+
                    other => Err(ValidationError::invalid_format(
                        $field,
                        format!("unknown value '{}'", other),
                    )),
                }
            }
        }
    };
}

labelled_enum!(
    /// Topic a survey is filed under.
    SurveyCategory, "category" {
        Society => "Société",
        Politics => "Politique",
        Entertainment => "Divertissement",
        Business => "Business",
        Sport => "Sport",
        Health => "Santé",
        Technology => "Technologie",
        Education => "Éducation",
    }
);

labelled_enum!(
    /// Who authored a survey.
    CreatorType, "creator_type" {
        Admin => "admin",
        Business => "business",
    }
);

labelled_enum!(
    /// Publication lifecycle of a survey.
    SurveyStatus, "status" {
        Draft => "draft",
        Active => "active",
        Scheduled => "scheduled",
        Ended => "ended",
        Archived => "archived",
    }
);

labelled_enum!(
    /// Audience a survey is visible to.
    SurveyPrivacy, "privacy" {
        Public => "public",
        Private => "private",
        SemiPrivate => "semi-private",
    }
);

labelled_enum!(
    /// Shape of the answer a question expects.
    QuestionType, "type" {
        Single => "single",
        Multiple => "multiple",
        Scale => "scale",
        Boolean => "boolean",
        Slider => "slider",
    }
);

impl QuestionType {
    /// Choice questions pick from a list of option labels.
    pub fn is_choice(&self) -> bool {
        matches!(self, QuestionType::Single | QuestionType::Multiple)
    }

    /// Numeric questions take a number, optionally bounded by `min`/`max`.
    pub fn is_numeric(&self) -> bool {
        matches!(self, QuestionType::Scale | QuestionType::Slider)
    }
}

impl Default for SurveyStatus {
    fn default() -> Self {
        SurveyStatus::Active
    }
}

impl Default for SurveyPrivacy {
    fn default() -> Self {
        SurveyPrivacy::Public
    }
}
