//! KéyaKé - survey platform backend.
//!
//! Businesses and admins publish surveys, participants answer them, and
//! results are tallied live from the stored answers.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
