use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Classification outcome cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub max_entries: u64,
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: defaults::DEFAULT_CACHE_MAX_ENTRIES,
            ttl_secs: defaults::DEFAULT_CACHE_TTL_SECS,
        }
    }
}

impl CacheConfig {
    /// Entry time-to-live, clamped to what the cache accepts.
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs.min(defaults::MAX_CACHE_TTL_SECS))
    }
}
