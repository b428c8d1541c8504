//! Business account query handlers.

mod get_business_profile;

pub use get_business_profile::{BusinessError, GetBusinessProfileHandler, GetBusinessProfileQuery};
