//! In-memory survey store.
//!
//! One shared state backs `SurveyRepository`, `AnswerRepository`,
//! `StatsReader` and `AccountReader`, so a submission updates surveys,
//! answers and participant progress under a single write lock, the same unit
//! of work the PostgreSQL adapter gets from a transaction. Nothing survives a
//! restart.
//!
//! ```ignore
//! let store = Arc::new(InMemorySurveyStore::new().with_participant("user_1"));
//! let surveys: Arc<dyn SurveyRepository> = store.clone();
//! let answers: Arc<dyn AnswerRepository> = store.clone();
//! ```

use std::collections::{HashMap, HashSet};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::answer::{Answer, Submission, POINTS_PER_COMPLETION};
use crate::domain::foundation::{BusinessId, DomainError, ErrorCode, SurveyId, Timestamp, UserId};
use crate::domain::survey::{Survey, SurveyStatus};
use crate::ports::{
    AccountReader, AdminStats, AnswerRepository, BusinessProfile, ParticipantProfile, StatsReader,
    SurveyRepository,
};

/// Reward counters for one participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParticipantProgress {
    pub points: i32,
    pub surveys_completed: i32,
}

#[derive(Default)]
struct StoreState {
    surveys: HashMap<SurveyId, Survey>,
    answers: Vec<Answer>,
    completions: HashSet<(UserId, SurveyId)>,
    participants: HashMap<UserId, ParticipantProfile>,
    businesses: HashMap<BusinessId, BusinessProfile>,
}

impl StoreState {
    /// Profile with survey activity filled in from the stored surveys.
    fn business_with_activity(&self, profile: &BusinessProfile) -> BusinessProfile {
        let owned = self.surveys.values().filter(|s| s.is_owned_by(&profile.id));
        let (created, responses) = owned.fold((0u64, 0u64), |(created, responses), survey| {
            (created + 1, responses + u64::from(survey.participant_count()))
        });
        BusinessProfile {
            surveys_created: created,
            total_responses: responses,
            ..profile.clone()
        }
    }
}

/// Thread-safe in-memory store for development and tests.
#[derive(Default)]
pub struct InMemorySurveyStore {
    state: RwLock<StoreState>,
}

impl InMemorySurveyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a participant profile so completions earn points.
    ///
    /// Blank ids are ignored. The id doubles as the display name.
    pub fn with_participant(self, user_id: impl Into<String>) -> Self {
        match UserId::new(user_id) {
            Ok(id) => {
                let name = id.as_str().to_string();
                let email = format!("{}@keyake.local", name);
                self.with_participant_profile(ParticipantProfile::new(id, name, email, Timestamp::now()))
            }
            Err(_) => self,
        }
    }

    pub fn with_participant_profile(self, profile: ParticipantProfile) -> Self {
        if let Ok(mut state) = self.state.write() {
            state.participants.entry(profile.id.clone()).or_insert(profile);
        }
        self
    }

    /// Register a business account named after its id.
    pub fn with_business(self, business_id: impl Into<String>) -> Self {
        match BusinessId::new(business_id) {
            Ok(id) => {
                let name = id.as_str().to_string();
                let email = format!("{}@keyake.local", name);
                self.with_business_profile(BusinessProfile::new(id, name, email, Timestamp::now()))
            }
            Err(_) => self,
        }
    }

    /// Register a business account; stored activity counters are ignored.
    pub fn with_business_profile(self, profile: BusinessProfile) -> Self {
        if let Ok(mut state) = self.state.write() {
            state.businesses.insert(profile.id.clone(), profile);
        }
        self
    }

    /// Current reward counters, if the participant has a profile.
    pub fn participant_progress(&self, user_id: &UserId) -> Option<ParticipantProgress> {
        self.read()
            .ok()?
            .participants
            .get(user_id)
            .map(|profile| ParticipantProgress {
                points: profile.points,
                surveys_completed: profile.surveys_completed,
            })
    }

    /// Number of stored answer rows across all surveys.
    pub fn answer_count(&self) -> usize {
        self.read().map(|s| s.answers.len()).unwrap_or(0)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, StoreState>, DomainError> {
        self.state
            .read()
            .map_err(|_| DomainError::new(ErrorCode::InternalError, "Survey store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, StoreState>, DomainError> {
        self.state
            .write()
            .map_err(|_| DomainError::new(ErrorCode::InternalError, "Survey store lock poisoned"))
    }
}

fn newest_first(mut surveys: Vec<Survey>) -> Vec<Survey> {
    surveys.sort_by(|a, b| b.created_at().cmp(a.created_at()).then_with(|| a.id().cmp(b.id())));
    surveys
}

#[async_trait]
impl SurveyRepository for InMemorySurveyStore {
    async fn save(&self, survey: &Survey) -> Result<(), DomainError> {
        self.write()?
            .surveys
            .insert(survey.id().clone(), survey.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &SurveyId) -> Result<Option<Survey>, DomainError> {
        Ok(self.read()?.surveys.get(id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Survey>, DomainError> {
        Ok(newest_first(self.read()?.surveys.values().cloned().collect()))
    }

    async fn list_by_business(&self, business_id: &BusinessId) -> Result<Vec<Survey>, DomainError> {
        let state = self.read()?;
        Ok(newest_first(
            state
                .surveys
                .values()
                .filter(|s| s.is_owned_by(business_id))
                .cloned()
                .collect(),
        ))
    }

    async fn delete(&self, id: &SurveyId) -> Result<(), DomainError> {
        let mut state = self.write()?;
        if state.surveys.remove(id).is_none() {
            return Err(DomainError::new(
                ErrorCode::SurveyNotFound,
                format!("Survey not found: {}", id),
            ));
        }
        state.answers.retain(|a| &a.survey_id != id);
        state.completions.retain(|(_, survey_id)| survey_id != id);
        Ok(())
    }
}

#[async_trait]
impl AnswerRepository for InMemorySurveyStore {
    async fn record_submission(&self, submission: &Submission) -> Result<(), DomainError> {
        let mut state = self.write()?;

        if !state.surveys.contains_key(&submission.survey_id) {
            return Err(DomainError::new(
                ErrorCode::SurveyNotFound,
                format!("Survey not found: {}", submission.survey_id),
            ));
        }

        let key = (submission.user_id.clone(), submission.survey_id.clone());
        if !state.completions.insert(key) {
            return Err(DomainError::new(
                ErrorCode::AlreadyCompleted,
                format!("Survey {} already completed", submission.survey_id),
            ));
        }

        state.answers.extend(submission.to_answers());

        let completed = state
            .completions
            .iter()
            .filter(|(_, survey_id)| survey_id == &submission.survey_id)
            .count();
        if let Some(survey) = state.surveys.get_mut(&submission.survey_id) {
            survey.set_participant_count(u32::try_from(completed).unwrap_or(u32::MAX));
        }

        if let Some(progress) = state.participants.get_mut(&submission.user_id) {
            progress.points += POINTS_PER_COMPLETION;
            progress.surveys_completed += 1;
        }

        Ok(())
    }

    async fn find_by_survey(&self, survey_id: &SurveyId) -> Result<Vec<Answer>, DomainError> {
        Ok(self
            .read()?
            .answers
            .iter()
            .filter(|a| &a.survey_id == survey_id)
            .cloned()
            .collect())
    }

    async fn has_completed(&self, user_id: &UserId, survey_id: &SurveyId) -> Result<bool, DomainError> {
        Ok(self
            .read()?
            .completions
            .contains(&(user_id.clone(), survey_id.clone())))
    }
}

#[async_trait]
impl StatsReader for InMemorySurveyStore {
    async fn get_admin_stats(&self) -> Result<AdminStats, DomainError> {
        let state = self.read()?;
        let active_businesses = state
            .businesses
            .keys()
            .filter(|id| {
                state
                    .surveys
                    .values()
                    .any(|s| s.is_owned_by(id) && s.status() == SurveyStatus::Active)
            })
            .count();
        Ok(AdminStats {
            total_businesses: state.businesses.len() as u64,
            active_businesses: active_businesses as u64,
            total_participants: state.participants.len() as u64,
            total_surveys: state.surveys.len() as u64,
            active_surveys: state
                .surveys
                .values()
                .filter(|s| s.status() == SurveyStatus::Active)
                .count() as u64,
        })
    }
}

#[async_trait]
impl AccountReader for InMemorySurveyStore {
    async fn find_business(&self, id: &BusinessId) -> Result<Option<BusinessProfile>, DomainError> {
        let state = self.read()?;
        Ok(state
            .businesses
            .get(id)
            .map(|profile| state.business_with_activity(profile)))
    }

    async fn list_businesses(&self) -> Result<Vec<BusinessProfile>, DomainError> {
        let state = self.read()?;
        let mut businesses: Vec<BusinessProfile> = state
            .businesses
            .values()
            .map(|profile| state.business_with_activity(profile))
            .collect();
        businesses.sort_by(|a, b| b.joined_at.cmp(&a.joined_at).then_with(|| a.id.cmp(&b.id)));
        Ok(businesses)
    }

    async fn list_participants(&self) -> Result<Vec<ParticipantProfile>, DomainError> {
        let mut participants: Vec<ParticipantProfile> =
            self.read()?.participants.values().cloned().collect();
        participants.sort_by(|a, b| b.joined_at.cmp(&a.joined_at).then_with(|| a.id.cmp(&b.id)));
        Ok(participants)
    }
}
