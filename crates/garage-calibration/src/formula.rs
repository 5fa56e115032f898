use serde::Serialize;

use garage_core::config::CalibrationConfig;

use crate::factors::CalibrationFactors;

/// Weighted five-factor combination.
///
/// ```text
/// calibrated = w_p·primary + w_h·historical + w_k·keyword + w_o·ontology + w_c·clarity
/// if historical < weak_history_threshold: calibrated × weak_history_penalty
/// ```
///
/// Result is clamped to [0.0, 1.0].
pub fn compute(factors: &CalibrationFactors, config: &CalibrationConfig) -> f64 {
    let w = &config.weights;
    let mut calibrated = w.primary * factors.primary
        + w.historical * factors.historical
        + w.keyword * factors.keyword
        + w.ontology * factors.ontology
        + w.clarity * factors.clarity;

    if factors.historical < config.weak_history_threshold {
        calibrated *= config.weak_history_penalty;
    }

    if calibrated.is_nan() {
        return 0.0;
    }
    calibrated.clamp(0.0, 1.0)
}

/// Every factor alongside the final value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalibrationBreakdown {
    pub primary: f64,
    pub historical: f64,
    pub keyword: f64,
    pub ontology: f64,
    pub clarity: f64,
    pub weak_history_penalty_applied: bool,
    pub calibrated: f64,
}

pub fn compute_breakdown(
    factors: &CalibrationFactors,
    config: &CalibrationConfig,
) -> CalibrationBreakdown {
    CalibrationBreakdown {
        primary: factors.primary,
        historical: factors.historical,
        keyword: factors.keyword,
        ontology: factors.ontology,
        clarity: factors.clarity,
        weak_history_penalty_applied: factors.historical < config.weak_history_threshold,
        calibrated: compute(factors, config),
    }
}
