//! Survey aggregate.
//!
//! A survey owns its ordered questions. Answers and completions reference the
//! survey by id and live in the answer store.

use super::{CreatorType, NewQuestion, Question, SurveyCategory, SurveyPrivacy, SurveyStatus};
use crate::domain::foundation::{
    AuthenticatedUser, BusinessId, QuestionId, SurveyId, Timestamp, ValidationError,
};

/// Author input for a new survey.
#[derive(Debug, Clone)]
pub struct NewSurvey {
    pub title: String,
    pub description: String,
    pub category: SurveyCategory,
    pub creator_type: CreatorType,
    pub creator_name: String,
    pub is_public: bool,
    pub ends_at: Option<Timestamp>,
    pub image_url: Option<String>,
    pub business_id: Option<BusinessId>,
    pub questions: Vec<NewQuestion>,
}

/// Survey aggregate.
///
/// # Invariants
///
/// - `title` is non-empty
/// - `questions` is non-empty and ordered by `order`, which equals the index
/// - `business_id` is present when `creator_type` is `Business`
#[derive(Debug, Clone, PartialEq)]
pub struct Survey {
    id: SurveyId,
    title: String,
    description: String,
    category: SurveyCategory,
    creator_type: CreatorType,
    creator_name: String,
    participant_count: u32,
    is_public: bool,
    is_trending: bool,
    created_at: Timestamp,
    ends_at: Option<Timestamp>,
    image_url: Option<String>,
    status: SurveyStatus,
    privacy: SurveyPrivacy,
    business_id: Option<BusinessId>,
    cost_credits: i32,
    questions: Vec<Question>,
}

impl Survey {
    /// Validate author input and build an active, public survey.
    ///
    /// # Errors
    ///
    /// - `EmptyField` for a blank title or creator name, or no questions
    /// - `EmptyField` for a business survey without a business id
    /// - any error from [`Question::create`]
    pub fn create(input: NewSurvey, now: Timestamp) -> Result<Self, ValidationError> {
        let title = input.title.trim().to_string();
        if title.is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        let creator_name = input.creator_name.trim().to_string();
        if creator_name.is_empty() {
            return Err(ValidationError::empty_field("creator_name"));
        }
        if input.creator_type == CreatorType::Business && input.business_id.is_none() {
            return Err(ValidationError::empty_field("business_id"));
        }
        if input.questions.is_empty() {
            return Err(ValidationError::empty_field("questions"));
        }

        let questions = input
            .questions
            .into_iter()
            .enumerate()
            .map(|(index, q)| Question::create(q, index as u32))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: SurveyId::generate(),
            title,
            description: input.description.trim().to_string(),
            category: input.category,
            creator_type: input.creator_type,
            creator_name,
            participant_count: 0,
            is_public: input.is_public,
            is_trending: false,
            created_at: now,
            ends_at: input.ends_at,
            image_url: input.image_url.filter(|url| !url.trim().is_empty()),
            status: SurveyStatus::Active,
            privacy: SurveyPrivacy::Public,
            business_id: input.business_id,
            cost_credits: 0,
            questions,
        })
    }

    /// Rebuild from persistence without validation.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: SurveyId,
        title: String,
        description: String,
        category: SurveyCategory,
        creator_type: CreatorType,
        creator_name: String,
        participant_count: u32,
        is_public: bool,
        is_trending: bool,
        created_at: Timestamp,
        ends_at: Option<Timestamp>,
        image_url: Option<String>,
        status: SurveyStatus,
        privacy: SurveyPrivacy,
        business_id: Option<BusinessId>,
        cost_credits: i32,
        mut questions: Vec<Question>,
    ) -> Self {
        questions.sort_by_key(|q| q.order());
        Self {
            id,
            title,
            description,
            category,
            creator_type,
            creator_name,
            participant_count,
            is_public,
            is_trending,
            created_at,
            ends_at,
            image_url,
            status,
            privacy,
            business_id,
            cost_credits,
            questions,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SurveyId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> SurveyCategory {
        self.category
    }

    pub fn creator_type(&self) -> CreatorType {
        self.creator_type
    }

    pub fn creator_name(&self) -> &str {
        &self.creator_name
    }

    /// Number of participants who completed the survey.
    pub fn participant_count(&self) -> u32 {
        self.participant_count
    }

    pub fn is_public(&self) -> bool {
        self.is_public
    }

    pub fn is_trending(&self) -> bool {
        self.is_trending
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn ends_at(&self) -> Option<&Timestamp> {
        self.ends_at.as_ref()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn status(&self) -> SurveyStatus {
        self.status
    }

    pub fn privacy(&self) -> SurveyPrivacy {
        self.privacy
    }

    pub fn business_id(&self) -> Option<&BusinessId> {
        self.business_id.as_ref()
    }

    pub fn cost_credits(&self) -> i32 {
        self.cost_credits
    }

    /// Questions in display order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    pub fn required_questions(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(|q| q.is_required())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rules
    // ─────────────────────────────────────────────────────────────────────────

    /// True while the survey is active and its end date (if any) is ahead.
    pub fn accepts_answers(&self, now: &Timestamp) -> bool {
        self.status == SurveyStatus::Active
            && self.ends_at.map_or(true, |ends_at| ends_at.is_after(now))
    }

    /// Record the current number of completions.
    pub fn set_participant_count(&mut self, count: u32) {
        self.participant_count = count;
    }

    pub fn is_owned_by(&self, business_id: &BusinessId) -> bool {
        self.business_id.as_ref() == Some(business_id)
    }

    /// Admins may delete any survey; businesses only their own.
    pub fn can_be_deleted_by(&self, user: &AuthenticatedUser) -> bool {
        if user.is_admin() {
            return true;
        }
        match user.business_id() {
            Some(Ok(business_id)) => self.is_owned_by(&business_id),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Role;
    use crate::domain::survey::QuestionType;

    fn yes_no() -> NewQuestion {
        NewQuestion {
            text: "Do you like it?".to_string(),
            question_type: QuestionType::Single,
            options: vec!["Yes".to_string(), "No".to_string()],
            min: None,
            max: None,
            required: true,
        }
    }

    fn optional_scale() -> NewQuestion {
        NewQuestion {
            text: "How much?".to_string(),
            question_type: QuestionType::Scale,
            options: vec![],
            min: Some(1),
            max: Some(5),
            required: false,
        }
    }

    fn new_business_survey() -> NewSurvey {
        NewSurvey {
            title: "  Customer feedback ".to_string(),
            description: "Tell us".to_string(),
            category: SurveyCategory::Business,
            creator_type: CreatorType::Business,
            creator_name: "Shop".to_string(),
            is_public: true,
            ends_at: None,
            image_url: Some("".to_string()),
            business_id: Some(BusinessId::new("business_1").unwrap()),
            questions: vec![yes_no(), optional_scale()],
        }
    }

    #[test]
    fn create_sets_initial_state() {
        let survey = Survey::create(new_business_survey(), Timestamp::now()).unwrap();
        assert_eq!(survey.title(), "Customer feedback");
        assert_eq!(survey.status(), SurveyStatus::Active);
        assert_eq!(survey.privacy(), SurveyPrivacy::Public);
        assert_eq!(survey.participant_count(), 0);
        assert_eq!(survey.cost_credits(), 0);
        assert!(!survey.is_trending());
        assert!(survey.image_url().is_none());
        assert!(survey.id().as_str().starts_with("survey_"));
    }

    #[test]
    fn create_orders_questions_by_index() {
        let survey = Survey::create(new_business_survey(), Timestamp::now()).unwrap();
        let orders: Vec<u32> = survey.questions().iter().map(|q| q.order()).collect();
        assert_eq!(orders, vec![0, 1]);
        assert_eq!(survey.required_questions().count(), 1);
    }

    #[test]
    fn create_rejects_blank_title() {
        let mut input = new_business_survey();
        input.title = " ".to_string();
        assert_eq!(
            Survey::create(input, Timestamp::now()).unwrap_err(),
            ValidationError::empty_field("title")
        );
    }

    #[test]
    fn create_rejects_survey_without_questions() {
        let mut input = new_business_survey();
        input.questions.clear();
        assert_eq!(
            Survey::create(input, Timestamp::now()).unwrap_err(),
            ValidationError::empty_field("questions")
        );
    }

    #[test]
    fn business_survey_requires_business_id() {
        let mut input = new_business_survey();
        input.business_id = None;
        assert!(Survey::create(input, Timestamp::now()).is_err());
    }

    #[test]
    fn invalid_question_fails_whole_survey() {
        let mut input = new_business_survey();
        input.questions[0].options = vec!["Yes".to_string()];
        let err = Survey::create(input, Timestamp::now()).unwrap_err();
        assert_eq!(err.field(), "questions[0].options");
    }

    #[test]
    fn question_lookup_by_id() {
        let survey = Survey::create(new_business_survey(), Timestamp::now()).unwrap();
        let id = survey.questions()[1].id().clone();
        assert_eq!(survey.question(&id).unwrap().order(), 1);
        assert!(survey.question(&QuestionId::new("missing").unwrap()).is_none());
    }

    #[test]
    fn accepts_answers_until_end_date() {
        let now = Timestamp::now();
        let mut input = new_business_survey();
        input.ends_at = Some(now.add_days(1));
        let survey = Survey::create(input, now).unwrap();

        assert!(survey.accepts_answers(&now));
        assert!(!survey.accepts_answers(&now.add_days(2)));
    }

    #[test]
    fn inactive_survey_rejects_answers() {
        let survey = Survey::create(new_business_survey(), Timestamp::now()).unwrap();
        let ended = Survey::reconstitute(
            survey.id().clone(),
            survey.title().to_string(),
            survey.description().to_string(),
            survey.category(),
            survey.creator_type(),
            survey.creator_name().to_string(),
            3,
            true,
            false,
            *survey.created_at(),
            None,
            None,
            SurveyStatus::Ended,
            SurveyPrivacy::Public,
            survey.business_id().cloned(),
            0,
            survey.questions().to_vec(),
        );
        assert!(!ended.accepts_answers(&Timestamp::now()));
        assert_eq!(ended.participant_count(), 3);
    }

    #[test]
    fn deletion_rights() {
        let survey = Survey::create(new_business_survey(), Timestamp::now()).unwrap();

        let owner = AuthenticatedUser::new("business_1", None, Role::Business);
        let other = AuthenticatedUser::new("business_2", None, Role::Business);
        let admin = AuthenticatedUser::new("admin_1", None, Role::Admin);
        let participant = AuthenticatedUser::new("business_1", None, Role::Participant);

        assert!(survey.can_be_deleted_by(&owner));
        assert!(survey.can_be_deleted_by(&admin));
        assert!(!survey.can_be_deleted_by(&other));
        assert!(!survey.can_be_deleted_by(&participant));
    }
}
