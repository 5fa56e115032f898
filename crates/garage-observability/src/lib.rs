//! # garage-observability
//!
//! Tracing initialization, span macros for each workflow stage, structured
//! workflow events, and tracking of degraded stages.

pub mod degradation;
pub mod tracing_setup;

pub use degradation::{DegradationTracker, RecoveryStatus, StageHealth, TrackedDegradation};
pub use tracing_setup::init_tracing;
