//! HTTP adapter for business endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::BusinessProfileResponse;
pub use handlers::{BusinessApiError, BusinessAppState};
pub use routes::business_routes;
