//! HTTP DTOs for survey endpoints.
//!
//! Field names are camelCase to match the mobile client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::SubmitAnswersResult;
use crate::domain::answer::{AnswerValue, SubmittedAnswer};
use crate::domain::foundation::{QuestionId, ValidationError};
use crate::domain::survey::{
    CreatorType, NewQuestion, Question, QuestionType, Survey, SurveyCategory, SurveyPrivacy,
    SurveyStatus,
};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

fn default_true() -> bool {
    true
}

/// Request to create a survey. The creator type and business come from the
/// caller's token.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSurveyRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: SurveyCategory,
    pub creator_name: String,
    #[serde(default = "default_true")]
    pub is_public: bool,
    #[serde(default)]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub questions: Vec<QuestionRequest>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRequest {
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub min: Option<i32>,
    #[serde(default)]
    pub max: Option<i32>,
    #[serde(default = "default_true")]
    pub required: bool,
}

impl From<QuestionRequest> for NewQuestion {
    fn from(req: QuestionRequest) -> Self {
        NewQuestion {
            text: req.text,
            question_type: req.question_type,
            options: req.options,
            min: req.min,
            max: req.max,
            required: req.required,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswersRequest {
    pub answers: Vec<AnswerRequest>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRequest {
    pub question_id: String,
    pub value: AnswerValue,
}

impl TryFrom<AnswerRequest> for SubmittedAnswer {
    type Error = ValidationError;

    fn try_from(req: AnswerRequest) -> Result<Self, Self::Error> {
        Ok(SubmittedAnswer {
            question_id: QuestionId::new(req.question_id)?,
            value: req.value,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsParams {
    #[serde(default)]
    pub include_unanswered: bool,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponse {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<i32>,
    pub required: bool,
    pub order: u32,
}

impl From<&Question> for QuestionResponse {
    fn from(q: &Question) -> Self {
        Self {
            id: q.id().to_string(),
            text: q.text().to_string(),
            question_type: q.question_type(),
            options: q.options().to_vec(),
            min: q.min(),
            max: q.max(),
            required: q.is_required(),
            order: q.order(),
        }
    }
}

/// A survey with its questions, in question order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: SurveyCategory,
    pub creator_type: CreatorType,
    pub creator_name: String,
    pub participant_count: u32,
    pub is_public: bool,
    pub is_trending: bool,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub status: SurveyStatus,
    pub privacy: SurveyPrivacy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_id: Option<String>,
    pub cost_credits: i32,
    pub questions: Vec<QuestionResponse>,
}

impl From<&Survey> for SurveyResponse {
    fn from(s: &Survey) -> Self {
        Self {
            id: s.id().to_string(),
            title: s.title().to_string(),
            description: s.description().to_string(),
            category: s.category(),
            creator_type: s.creator_type(),
            creator_name: s.creator_name().to_string(),
            participant_count: s.participant_count(),
            is_public: s.is_public(),
            is_trending: s.is_trending(),
            created_at: s.created_at().as_datetime().to_rfc3339(),
            ends_at: s.ends_at().map(|t| t.as_datetime().to_rfc3339()),
            image_url: s.image_url().map(str::to_string),
            status: s.status(),
            privacy: s.privacy(),
            business_id: s.business_id().map(|b| b.to_string()),
            cost_credits: s.cost_credits(),
            questions: s.questions().iter().map(QuestionResponse::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswersResponse {
    pub success: bool,
    pub survey_id: String,
    pub answers_recorded: usize,
}

impl From<SubmitAnswersResult> for SubmitAnswersResponse {
    fn from(result: SubmitAnswersResult) -> Self {
        Self {
            success: true,
            survey_id: result.survey_id.to_string(),
            answers_recorded: result.answers_recorded,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteSurveyResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{BusinessId, Timestamp};
    use crate::domain::survey::{NewSurvey, QuestionType};

    #[test]
    fn create_request_applies_defaults() {
        let json = r#"{
            "title": "Cafés",
            "category": "Société",
            "creatorName": "Mairie",
            "questions": [{ "text": "Pick one", "type": "single", "options": ["A", "B"] }]
        }"#;

        let req: CreateSurveyRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.category, SurveyCategory::Society);
        assert!(req.is_public);
        assert_eq!(req.description, "");
        assert!(req.questions[0].required);
        assert_eq!(req.questions[0].question_type, QuestionType::Single);
    }

    #[test]
    fn answer_request_accepts_any_json_value() {
        let json = r#"{ "answers": [
            { "questionId": "q1", "value": "Yes" },
            { "questionId": "q2", "value": ["A", "B"] },
            { "questionId": "q3", "value": 4 },
            { "questionId": "q4", "value": true }
        ] }"#;

        let req: SubmitAnswersRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.answers[0].value, AnswerValue::Label("Yes".into()));
        assert_eq!(req.answers[1].value, AnswerValue::Labels(vec!["A".into(), "B".into()]));
        assert_eq!(req.answers[2].value, AnswerValue::Number(4.0));
        assert_eq!(req.answers[3].value, AnswerValue::Flag(true));
    }

    #[test]
    fn blank_question_id_is_rejected() {
        let req = AnswerRequest {
            question_id: "  ".to_string(),
            value: AnswerValue::Flag(true),
        };
        assert!(SubmittedAnswer::try_from(req).is_err());
    }

    #[test]
    fn survey_response_uses_client_field_names() {
        let survey = Survey::create(
            NewSurvey {
                title: "Menu".to_string(),
                description: String::new(),
                category: SurveyCategory::Business,
                creator_type: CreatorType::Business,
                creator_name: "Bistro".to_string(),
                is_public: true,
                ends_at: None,
                image_url: None,
                business_id: Some(BusinessId::new("business_1").unwrap()),
                questions: vec![NewQuestion {
                    text: "Rate us".to_string(),
                    question_type: QuestionType::Scale,
                    options: vec![],
                    min: Some(1),
                    max: Some(5),
                    required: true,
                }],
            },
            Timestamp::now(),
        )
        .unwrap();

        let json = serde_json::to_value(SurveyResponse::from(&survey)).unwrap();

        assert_eq!(json["creatorType"], "business");
        assert_eq!(json["businessId"], "business_1");
        assert_eq!(json["participantCount"], 0);
        assert_eq!(json["questions"][0]["type"], "scale");
        assert_eq!(json["questions"][0]["max"], 5);
        assert!(json["questions"][0].get("options").is_none());
        assert!(json.get("endsAt").is_none());
    }
}
