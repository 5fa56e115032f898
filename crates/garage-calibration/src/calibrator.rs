//! ConfidenceCalibrator: signals in, calibrated confidence with level and band out.

use serde::Serialize;
use std::fmt;
use tracing::debug;

use garage_core::config::CalibrationConfig;
use garage_core::Confidence;

use crate::factors::{self, CalibrationFactors};
use crate::formula::{self, CalibrationBreakdown};

const BAND_BASE: f64 = 0.1;
const BAND_MIDRANGE_SCALE: f64 = 0.1;

/// Raw signals for one candidate.
#[derive(Debug, Clone, Default)]
pub struct CalibrationSignals {
    /// Proposer's self-reported confidence.
    pub primary: f64,
    /// Historical similarity scores, most similar first.
    pub historical_scores: Vec<f64>,
    pub keywords_matched: usize,
    pub keywords_total: usize,
    /// Character length of the original complaint.
    pub input_chars: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfidenceLevel {
    High,
    Moderate,
    Low,
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::High => "HIGH",
            Self::Moderate => "MODERATE",
            Self::Low => "LOW",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalibratedConfidence {
    pub value: Confidence,
    pub level: ConfidenceLevel,
    /// Uncertainty interval `(lower, upper)`, widest at mid-range values.
    pub band: (f64, f64),
    pub breakdown: CalibrationBreakdown,
}

#[derive(Debug, Clone, Default)]
pub struct ConfidenceCalibrator {
    config: CalibrationConfig,
}

impl ConfidenceCalibrator {
    pub fn new(config: CalibrationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalibrationConfig {
        &self.config
    }

    pub fn factors(&self, signals: &CalibrationSignals) -> CalibrationFactors {
        let primary = signals.primary.clamp(0.0, 1.0);
        CalibrationFactors {
            primary,
            historical: factors::historical::calculate(
                &signals.historical_scores,
                self.config.historical_no_match,
            ),
            keyword: factors::keyword::calculate(signals.keywords_matched, signals.keywords_total),
            ontology: factors::ontology::calculate(primary),
            clarity: factors::clarity::calculate(signals.input_chars),
        }
    }

    pub fn calibrate(&self, signals: &CalibrationSignals) -> CalibratedConfidence {
        let breakdown = formula::compute_breakdown(&self.factors(signals), &self.config);
        let value = Confidence::new(breakdown.calibrated);
        let result = CalibratedConfidence {
            value,
            level: self.level(value.value()),
            band: uncertainty_band(value.value()),
            breakdown,
        };
        debug!(
            calibrated = result.value.value(),
            level = %result.level,
            historical = breakdown.historical,
            keyword = breakdown.keyword,
            "confidence calibrated"
        );
        result
    }

    pub fn level(&self, value: f64) -> ConfidenceLevel {
        if value >= self.config.high_level_threshold {
            ConfidenceLevel::High
        } else if value >= self.config.moderate_level_threshold {
            ConfidenceLevel::Moderate
        } else {
            ConfidenceLevel::Low
        }
    }
}

/// `value ± (0.1 + min(value, 1 - value) · 0.1)`, clamped to [0, 1].
pub fn uncertainty_band(value: f64) -> (f64, f64) {
    let half = BAND_BASE + value.min(1.0 - value) * BAND_MIDRANGE_SCALE;
    ((value - half).max(0.0), (value + half).min(1.0))
}
