//! HTTP handlers for admin endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::business::BusinessProfileResponse;
use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::{
    AdminError, GetAdminStatsHandler, GetAdminStatsQuery, ListBusinessesHandler,
    ListBusinessesQuery, ListParticipantsHandler, ListParticipantsQuery,
};
use crate::ports::{AccountReader, StatsReader};

use super::dto::{AdminStatsResponse, ParticipantResponse};

#[derive(Clone)]
pub struct AdminAppState {
    pub stats_reader: Arc<dyn StatsReader>,
    pub accounts: Arc<dyn AccountReader>,
}

impl AdminAppState {
    pub fn new(stats_reader: Arc<dyn StatsReader>, accounts: Arc<dyn AccountReader>) -> Self {
        Self {
            stats_reader,
            accounts,
        }
    }
}

/// GET /api/admin/stats
pub async fn get_admin_stats(
    State(state): State<AdminAppState>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let handler = GetAdminStatsHandler::new(state.stats_reader.clone());
    match handler.handle(GetAdminStatsQuery { requested_by: user }).await {
        Ok(stats) => Json(AdminStatsResponse::from(stats)).into_response(),
        Err(e) => handle_admin_error(e),
    }
}

/// GET /api/admin/businesses
pub async fn list_businesses(
    State(state): State<AdminAppState>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let handler = ListBusinessesHandler::new(state.accounts.clone());
    match handler.handle(ListBusinessesQuery { requested_by: user }).await {
        Ok(businesses) => {
            let body: Vec<BusinessProfileResponse> =
                businesses.iter().map(BusinessProfileResponse::from).collect();
            Json(body).into_response()
        }
        Err(e) => handle_admin_error(e),
    }
}

/// GET /api/admin/participants
pub async fn list_participants(
    State(state): State<AdminAppState>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let handler = ListParticipantsHandler::new(state.accounts.clone());
    match handler.handle(ListParticipantsQuery { requested_by: user }).await {
        Ok(participants) => {
            let body: Vec<ParticipantResponse> =
                participants.iter().map(ParticipantResponse::from).collect();
            Json(body).into_response()
        }
        Err(e) => handle_admin_error(e),
    }
}

fn handle_admin_error(error: AdminError) -> Response {
    match error {
        AdminError::Forbidden => (
            StatusCode::FORBIDDEN,
            Json(ErrorResponse::forbidden("Admin access required")),
        )
            .into_response(),
        AdminError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "Admin query failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::internal())).into_response()
        }
    }
}
