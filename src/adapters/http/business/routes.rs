//! Axum routes for business endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_business_profile, BusinessAppState};

/// Business routes, mounted under `/api`.
///
/// - `GET /business/:business_id` - public business profile
pub fn business_routes() -> Router<BusinessAppState> {
    Router::new().route("/business/:business_id", get(get_business_profile))
}
