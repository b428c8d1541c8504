//! HTTP DTOs for admin endpoints.

use serde::Serialize;

use crate::ports::{AdminStats, ParticipantProfile};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStatsResponse {
    pub total_businesses: u64,
    pub active_businesses: u64,
    pub total_participants: u64,
    pub total_surveys: u64,
    pub active_surveys: u64,
}

impl From<AdminStats> for AdminStatsResponse {
    fn from(stats: AdminStats) -> Self {
        Self {
            total_businesses: stats.total_businesses,
            active_businesses: stats.active_businesses,
            total_participants: stats.total_participants,
            total_surveys: stats.total_surveys,
            active_surveys: stats.active_surveys,
        }
    }
}

/// Participant row in the admin console.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub surveys_completed: i32,
    pub points: i32,
    pub joined_at: String,
}

impl From<&ParticipantProfile> for ParticipantResponse {
    fn from(p: &ParticipantProfile) -> Self {
        Self {
            id: p.id.to_string(),
            name: p.name.clone(),
            email: p.email.clone(),
            phone: p.phone.clone(),
            status: p.status.clone(),
            photo_url: p.photo_url.clone(),
            surveys_completed: p.surveys_completed,
            points: p.points,
            joined_at: p.joined_at.as_datetime().to_rfc3339(),
        }
    }
}
