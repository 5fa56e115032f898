use serde::{Deserialize, Serialize};

/// A previously resolved case similar to the current complaint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalMatch {
    pub id: String,
    pub complaint: String,
    pub system: String,
    pub component: String,
    pub failure_mode: String,
    #[serde(default)]
    pub resolution: String,
    /// Similarity to the current complaint in [0, 1].
    pub score: f64,
}
