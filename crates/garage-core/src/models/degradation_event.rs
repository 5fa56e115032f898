use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stage that failed and fell back to reduced evidence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DegradationEvent {
    pub component: String,
    pub failure: String,
    pub fallback_used: String,
    pub timestamp: DateTime<Utc>,
}
