//! Command and query handlers, grouped by module.

pub mod admin;
pub mod business;
pub mod survey;
