use serde::{Deserialize, Serialize};

use super::defaults;

/// Session lifecycle configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Sessions idle longer than this are removed by stale-session cleanup.
    pub idle_timeout_secs: u64,
    /// Oldest messages are dropped beyond this many.
    pub max_messages: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_timeout_secs: defaults::DEFAULT_SESSION_IDLE_TIMEOUT_SECS,
            max_messages: defaults::DEFAULT_SESSION_MAX_MESSAGES,
        }
    }
}
