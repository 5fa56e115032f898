//! # garage-calibration
//!
//! Combines a proposer's self-reported confidence with historical agreement,
//! keyword coverage, ontology fit, and input clarity into one calibrated score.

pub mod calibrator;
pub mod factors;
pub mod formula;

pub use calibrator::{CalibratedConfidence, CalibrationSignals, ConfidenceCalibrator, ConfidenceLevel};
pub use formula::CalibrationBreakdown;
