use serde::{Deserialize, Serialize};

use super::defaults;

/// Relative weight of each calibration factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalibrationWeights {
    pub primary: f64,
    pub historical: f64,
    pub keyword: f64,
    pub ontology: f64,
    pub clarity: f64,
}

impl Default for CalibrationWeights {
    fn default() -> Self {
        Self {
            primary: defaults::DEFAULT_PRIMARY_WEIGHT,
            historical: defaults::DEFAULT_HISTORICAL_WEIGHT,
            keyword: defaults::DEFAULT_KEYWORD_WEIGHT,
            ontology: defaults::DEFAULT_ONTOLOGY_WEIGHT,
            clarity: defaults::DEFAULT_CLARITY_WEIGHT,
        }
    }
}

/// Confidence calibration configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalibrationConfig {
    pub weights: CalibrationWeights,
    /// Historical factor used when there are no similar cases.
    pub historical_no_match: f64,
    /// Historical factor below which the weak-history penalty applies.
    pub weak_history_threshold: f64,
    /// Multiplier applied when history is weak.
    pub weak_history_penalty: f64,
    pub high_level_threshold: f64,
    pub moderate_level_threshold: f64,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            weights: CalibrationWeights::default(),
            historical_no_match: defaults::DEFAULT_HISTORICAL_NO_MATCH,
            weak_history_threshold: defaults::DEFAULT_WEAK_HISTORY_THRESHOLD,
            weak_history_penalty: defaults::DEFAULT_WEAK_HISTORY_PENALTY,
            high_level_threshold: defaults::DEFAULT_HIGH_LEVEL_THRESHOLD,
            moderate_level_threshold: defaults::DEFAULT_MODERATE_LEVEL_THRESHOLD,
        }
    }
}
