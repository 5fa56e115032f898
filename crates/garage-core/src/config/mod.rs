//! Configuration for the diagnostic core.
//!
//! Every section is optional in TOML; missing fields fall back to [`defaults`].

mod cache_config;
mod calibration_config;
pub mod defaults;
mod observability_config;
mod orchestrator_config;
mod resolution_config;
mod session_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use cache_config::CacheConfig;
pub use calibration_config::{CalibrationConfig, CalibrationWeights};
pub use observability_config::ObservabilityConfig;
pub use orchestrator_config::OrchestratorConfig;
pub use resolution_config::ResolutionConfig;
pub use session_config::SessionConfig;

use crate::errors::{DiagnosticError, DiagnosticResult};

/// Top-level configuration aggregating all sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticConfig {
    pub calibration: CalibrationConfig,
    pub resolution: ResolutionConfig,
    pub orchestrator: OrchestratorConfig,
    pub cache: CacheConfig,
    pub session: SessionConfig,
    pub observability: ObservabilityConfig,
}

impl DiagnosticConfig {
    /// Parse from a TOML string. Out-of-range limits are clamped.
    pub fn from_toml(input: &str) -> DiagnosticResult<Self> {
        toml::from_str::<Self>(input)
            .map(Self::clamped)
            .map_err(|e| DiagnosticError::ConfigError(e.to_string()))
    }

    /// Pull limits back into the range the runtime accepts.
    pub fn clamped(mut self) -> Self {
        self.cache.ttl_secs = self.cache.ttl_secs.min(defaults::MAX_CACHE_TTL_SECS);
        self.orchestrator.max_stage_workers = self.orchestrator.max_stage_workers.max(1);
        self.orchestrator.degradation_history = self.orchestrator.degradation_history.max(1);
        self
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> DiagnosticResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            DiagnosticError::ConfigError(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml(&raw)
    }
}
