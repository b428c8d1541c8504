//! HTTP adapter for admin endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{AdminStatsResponse, ParticipantResponse};
pub use handlers::AdminAppState;
pub use routes::admin_routes;
