use serde::{Deserialize, Serialize};

use super::defaults;

/// Workflow orchestration configuration.
///
/// The reflection cap is deliberately absent: it is the fixed constant
/// [`crate::constants::MAX_REFLECTION_LOOPS`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrchestratorConfig {
    /// Deadline for a single collaborator call. 0 runs stages inline with no deadline.
    pub stage_timeout_ms: u64,
    pub historical_top_k: usize,
    pub knowledge_top_k: usize,
    /// Items of each evidence kind placed in the proposer bundle.
    pub bundle_top_n: usize,
    /// Similar cases echoed back in the response.
    pub similar_cases_shown: usize,
    /// Deadline workers allowed to run at once, including ones that overran.
    /// Calls beyond this fail immediately instead of spawning.
    pub max_stage_workers: usize,
    /// Degradation events kept before the oldest are evicted.
    pub degradation_history: usize,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            stage_timeout_ms: defaults::DEFAULT_STAGE_TIMEOUT_MS,
            historical_top_k: defaults::DEFAULT_HISTORICAL_TOP_K,
            knowledge_top_k: defaults::DEFAULT_KNOWLEDGE_TOP_K,
            bundle_top_n: defaults::DEFAULT_BUNDLE_TOP_N,
            similar_cases_shown: defaults::DEFAULT_SIMILAR_CASES_SHOWN,
            max_stage_workers: defaults::DEFAULT_MAX_STAGE_WORKERS,
            degradation_history: defaults::DEFAULT_DEGRADATION_HISTORY,
        }
    }
}
