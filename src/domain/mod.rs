//! Domain layer - survey rules and the results aggregator.
//!
//! No I/O happens here; ports in `crate::ports` bring data in and out.

pub mod answer;
pub mod foundation;
pub mod results;
pub mod survey;
