// Calibration
pub const DEFAULT_PRIMARY_WEIGHT: f64 = 0.35;
pub const DEFAULT_HISTORICAL_WEIGHT: f64 = 0.25;
pub const DEFAULT_KEYWORD_WEIGHT: f64 = 0.15;
pub const DEFAULT_ONTOLOGY_WEIGHT: f64 = 0.15;
pub const DEFAULT_CLARITY_WEIGHT: f64 = 0.10;
pub const DEFAULT_HISTORICAL_NO_MATCH: f64 = 0.3;
pub const DEFAULT_WEAK_HISTORY_THRESHOLD: f64 = 0.5;
pub const DEFAULT_WEAK_HISTORY_PENALTY: f64 = 0.9;
pub const DEFAULT_HIGH_LEVEL_THRESHOLD: f64 = 0.75;
pub const DEFAULT_MODERATE_LEVEL_THRESHOLD: f64 = 0.40;

// Resolution
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = crate::constants::CONFIDENCE_THRESHOLD;
pub const DEFAULT_AMBIGUITY_DELTA: f64 = crate::constants::AMBIGUITY_DELTA;
pub const DEFAULT_FOLLOW_UP_LIMIT: usize = crate::constants::FOLLOW_UP_LIMIT;

// Orchestrator
pub const DEFAULT_STAGE_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_HISTORICAL_TOP_K: usize = 5;
pub const DEFAULT_KNOWLEDGE_TOP_K: usize = 5;
pub const DEFAULT_BUNDLE_TOP_N: usize = 3;
pub const DEFAULT_SIMILAR_CASES_SHOWN: usize = 3;
pub const DEFAULT_MAX_STAGE_WORKERS: usize = 16;
pub const DEFAULT_DEGRADATION_HISTORY: usize = 256;

// Cache
pub const DEFAULT_CACHE_MAX_ENTRIES: u64 = 1_000;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3_600;
/// Largest time-to-live the cache accepts: 1000 years of 365 days.
pub const MAX_CACHE_TTL_SECS: u64 = 1_000 * 365 * 24 * 3_600;

// Session
pub const DEFAULT_SESSION_IDLE_TIMEOUT_SECS: u64 = 1_800;
pub const DEFAULT_SESSION_MAX_MESSAGES: usize = 200;

// Observability
pub const DEFAULT_LOG_LEVEL: &str = "info";
