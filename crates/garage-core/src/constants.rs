/// Diagnostic core version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Minimum confidence for a top candidate to be treated as decisive.
pub const CONFIDENCE_THRESHOLD: f64 = 0.70;

/// Maximum gap between the top two candidates that still counts as a tie.
pub const AMBIGUITY_DELTA: f64 = 0.10;

/// Hard cap on reflection (refine-and-retry) cycles per session.
/// This is the sole termination guarantee of the reflection loop and is not configurable.
pub const MAX_REFLECTION_LOOPS: u32 = 1;

/// Number of follow-up questions returned for an ambiguous outcome.
pub const FOLLOW_UP_LIMIT: usize = 3;

/// Number of historical similarity scores considered by calibration.
pub const HISTORICAL_SIGNAL_TOP_K: usize = 5;

/// Upper bound on a historical-match fallback's primary confidence.
pub const HISTORICAL_FALLBACK_CAP: f64 = 0.85;

/// Number of characters of an evidence item used for its dedup signature.
pub const DEDUP_PREFIX_CHARS: usize = 100;

/// Suffix appended to the refined retrieval query.
pub const REFINE_QUERY_SUFFIX: &str = "symptoms";
