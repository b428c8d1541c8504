//! Authentication adapters implementing the `SessionValidator` port.
//!
//! - `jwt` - HS256 tokens signed with the configured secret
//! - `mock` - fixed token table for tests

mod jwt;
mod mock;

pub use jwt::JwtSessionValidator;
pub use mock::MockSessionValidator;
