//! HTTP DTOs for business endpoints.

use serde::Serialize;

use crate::ports::BusinessProfile;

/// Public business profile.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProfileResponse {
    pub id: String,
    pub company_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    pub surveys_created: u64,
    pub total_responses: u64,
    pub credits: i32,
    pub is_premium: bool,
    pub joined_at: String,
}

impl From<&BusinessProfile> for BusinessProfileResponse {
    fn from(b: &BusinessProfile) -> Self {
        Self {
            id: b.id.to_string(),
            company_name: b.company_name.clone(),
            email: b.email.clone(),
            phone: b.phone.clone(),
            tax_id: b.tax_id.clone(),
            logo: b.logo.clone(),
            description: b.description.clone(),
            website: b.website.clone(),
            industry: b.industry.clone(),
            surveys_created: b.surveys_created,
            total_responses: b.total_responses,
            credits: b.credits,
            is_premium: b.is_premium,
            joined_at: b.joined_at.as_datetime().to_rfc3339(),
        }
    }
}
