//! Adapters - Implementations of port interfaces.
//!
//! - `auth` - JWT session validation and a mock validator
//! - `http` - axum routes, DTOs and middleware
//! - `in_memory` - in-process store for development and tests
//! - `postgres` - sqlx repositories

pub mod auth;
pub mod http;
pub mod in_memory;
pub mod postgres;
