use serde::{Deserialize, Serialize};

use super::defaults;

/// Ambiguity resolution configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionConfig {
    /// Minimum top-candidate confidence for a decisive outcome.
    pub confidence_threshold: f64,
    /// Gap between the top two candidates at or below which they tie.
    pub ambiguity_delta: f64,
    /// Number of follow-up questions to return.
    pub follow_up_limit: usize,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: defaults::DEFAULT_CONFIDENCE_THRESHOLD,
            ambiguity_delta: defaults::DEFAULT_AMBIGUITY_DELTA,
            follow_up_limit: defaults::DEFAULT_FOLLOW_UP_LIMIT,
        }
    }
}
