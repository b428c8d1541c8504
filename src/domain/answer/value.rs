//! Answer value sum type.
//!
//! Stored answers are free-form JSON. Anything the client can legitimately
//! send maps onto a typed variant; anything else is kept verbatim in
//! `Other` so that legacy rows still aggregate instead of failing.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::foundation::ValidationError;
use crate::domain::survey::{Question, QuestionType};

/// Largest integer an `f64` represents exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// A respondent's value for one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum AnswerValue {
    /// Single-choice label.
    Label(String),
    /// Multi-choice labels.
    Labels(Vec<String>),
    /// Scale or slider position.
    Number(f64),
    /// Yes/no.
    Flag(bool),
    /// Unrecognised JSON shape.
    Other(Value),
}

impl AnswerValue {
    /// Vote keys this value contributes: one per scalar, one per list element.
    pub fn labels(&self) -> Vec<String> {
        match self {
            AnswerValue::Label(label) => vec![label.clone()],
            AnswerValue::Labels(labels) => labels.clone(),
            AnswerValue::Number(n) => vec![render_number(*n)],
            AnswerValue::Flag(flag) => vec![flag.to_string()],
            AnswerValue::Other(Value::Array(items)) => items.iter().map(render_json).collect(),
            AnswerValue::Other(other) => vec![render_json(other)],
        }
    }

    /// Check that the value has the shape and range `question` expects.
    pub fn validate_against(&self, question: &Question) -> Result<(), ValidationError> {
        match (question.question_type(), self) {
            (QuestionType::Single, AnswerValue::Label(label)) => {
                if question.has_option(label) {
                    Ok(())
                } else {
                    Err(ValidationError::invalid_format(
                        "value",
                        format!("'{}' is not an option", label),
                    ))
                }
            }
            (QuestionType::Multiple, AnswerValue::Labels(labels)) => {
                if labels.is_empty() {
                    return Err(ValidationError::empty_field("value"));
                }
                if let Some(unknown) = labels.iter().find(|l| !question.has_option(l)) {
                    return Err(ValidationError::invalid_format(
                        "value",
                        format!("'{}' is not an option", unknown),
                    ));
                }
                let mut seen = labels.clone();
                seen.sort();
                seen.dedup();
                if seen.len() != labels.len() {
                    return Err(ValidationError::invalid_format(
                        "value",
                        "an option was selected twice",
                    ));
                }
                Ok(())
            }
            (QuestionType::Scale | QuestionType::Slider, AnswerValue::Number(n)) => {
                let min = question.min().map(f64::from);
                let max = question.max().map(f64::from);
                let below = min.is_some_and(|min| *n < min);
                let above = max.is_some_and(|max| *n > max);
                if below || above {
                    return Err(ValidationError::out_of_range(
                        "value",
                        min.unwrap_or(f64::NEG_INFINITY),
                        max.unwrap_or(f64::INFINITY),
                        *n,
                    ));
                }
                Ok(())
            }
            (QuestionType::Boolean, AnswerValue::Flag(_)) => Ok(()),
            (expected, _) => Err(ValidationError::invalid_format(
                "value",
                format!("expected a {} answer", expected),
            )),
        }
    }
}

impl From<Value> for AnswerValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Bool(flag) => AnswerValue::Flag(flag),
            Value::String(label) => AnswerValue::Label(label),
            Value::Number(ref n) => match n.as_f64() {
                Some(f) => AnswerValue::Number(f),
                None => AnswerValue::Other(value),
            },
            Value::Array(ref items) if items.iter().all(Value::is_string) => AnswerValue::Labels(
                items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect(),
            ),
            other => AnswerValue::Other(other),
        }
    }
}

impl From<AnswerValue> for Value {
    fn from(value: AnswerValue) -> Self {
        match value {
            AnswerValue::Label(label) => Value::String(label),
            AnswerValue::Labels(labels) => {
                Value::Array(labels.into_iter().map(Value::String).collect())
            }
            AnswerValue::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => {
                Value::from(n as i64)
            }
            AnswerValue::Number(n) => serde_json::Number::from_f64(n)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            AnswerValue::Flag(flag) => Value::Bool(flag),
            AnswerValue::Other(other) => other,
        }
    }
}

/// Renders a number the way a JavaScript client would print it: positional
/// notation inside `[1e-6, 1e21)`, exponent notation with a signed exponent
/// outside it.
fn render_number(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return n.to_string();
    }
    let exponential = format!("{:e}", n);
    match exponential.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => exponential,
    }
}

fn render_json(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (_, Some(u), _) => u.to_string(),
            (_, _, Some(f)) => render_number(f),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}
