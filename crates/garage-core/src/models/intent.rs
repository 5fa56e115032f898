use serde::{Deserialize, Serialize};

use crate::confidence::Confidence;

/// A classification as exposed at the outcome boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    pub system: String,
    pub component: String,
    pub failure_mode: String,
    pub confidence: Confidence,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vmrs_code: Option<String>,
}
