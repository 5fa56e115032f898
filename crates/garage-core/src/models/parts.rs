use serde::{Deserialize, Serialize};

/// Parts and labor associated with a failure mode or component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartsDependency {
    #[serde(default)]
    pub mandatory: Vec<String>,
    #[serde(default)]
    pub recommended: Vec<String>,
    #[serde(default)]
    pub labor_note: Option<String>,
}
