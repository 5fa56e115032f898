use serde::{Deserialize, Serialize};

/// Structured symptoms pulled out of a complaint by the external extractor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SymptomExtraction {
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub noise_type: Option<String>,
}

impl SymptomExtraction {
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
            && self.location.is_none()
            && self.condition.is_none()
            && self.noise_type.is_none()
    }
}
