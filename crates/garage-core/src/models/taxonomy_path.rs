use serde::{Deserialize, Serialize};
use std::fmt;

/// A canonical (upper-case) `system -> component -> failure_mode` triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaxonomyPath {
    pub system: String,
    pub component: String,
    pub failure_mode: String,
}

impl TaxonomyPath {
    pub fn new(
        system: impl Into<String>,
        component: impl Into<String>,
        failure_mode: impl Into<String>,
    ) -> Self {
        Self {
            system: system.into(),
            component: component.into(),
            failure_mode: failure_mode.into(),
        }
    }

    /// Lower-cased words of all three segments, split on `_` and whitespace.
    pub fn tokens(&self) -> Vec<String> {
        [&self.system, &self.component, &self.failure_mode]
            .iter()
            .flat_map(|segment| segment.split(|c: char| c == '_' || c.is_whitespace()))
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
            .collect()
    }
}

impl fmt::Display for TaxonomyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} -> {}",
            self.system, self.component, self.failure_mode
        )
    }
}
