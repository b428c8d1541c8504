//! Axum routes for admin endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_admin_stats, list_businesses, list_participants, AdminAppState};

/// Admin routes, mounted under `/api`. All require an admin token.
///
/// - `GET /admin/stats` - platform counts
/// - `GET /admin/businesses` - every business profile
/// - `GET /admin/participants` - every participant with reward counters
pub fn admin_routes() -> Router<AdminAppState> {
    Router::new()
        .route("/admin/stats", get(get_admin_stats))
        .route("/admin/businesses", get(list_businesses))
        .route("/admin/participants", get(list_participants))
}
