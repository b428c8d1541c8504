//! HTTP adapters - REST API implementations.
//!
//! Each module has its own `dto`, `handlers` and `routes`; `app_router`
//! mounts them under `/api` behind the auth middleware and the shared
//! tower-http stack.

pub mod admin;
pub mod business;
pub mod error;
pub mod middleware;
pub mod survey;

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;

pub use admin::{admin_routes, AdminAppState};
pub use business::{business_routes, BusinessAppState};
pub use error::ErrorResponse;
pub use middleware::{auth_middleware, AuthState, RequireAuth};
pub use survey::{survey_routes, SurveyApiError, SurveyAppState};

/// Everything the router needs.
#[derive(Clone)]
pub struct AppState {
    pub surveys: SurveyAppState,
    pub admin: AdminAppState,
    pub business: BusinessAppState,
    pub auth: AuthState,
}

/// Build the full application router.
pub fn app_router(state: AppState, server: &ServerConfig) -> Router {
    let api = Router::new()
        .merge(survey_routes().with_state(state.surveys))
        .merge(business_routes().with_state(state.business))
        .merge(admin_routes().with_state(state.admin))
        .layer(axum::middleware::from_fn_with_state(state.auth, auth_middleware));

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Configured origins if any; otherwise any origin outside production and
/// same-origin only in production.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring unparsable CORS origin");
                None
            }
        })
        .collect();

    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    if !origins.is_empty() {
        base.allow_origin(AllowOrigin::list(origins))
    } else if server.is_production() {
        base
    } else {
        base.allow_origin(AllowOrigin::any())
    }
}
