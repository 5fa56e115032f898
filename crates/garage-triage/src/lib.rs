//! # garage-triage
//!
//! Rule tables mapping a diagnosis path to severity, vehicle state, a suggested
//! workshop action, and a one-line technical summary. Pure lookups, no state.

pub mod engine;
pub mod summary;

pub use engine::TriageEngine;
pub use summary::{technical_summary, OUT_OF_SCOPE_SUMMARY, UNDETERMINED_SUMMARY};
