//! Degradation tracking for collaborator stages.

pub mod tracker;

pub use tracker::{DegradationTracker, RecoveryStatus, StageHealth, TrackedDegradation};
