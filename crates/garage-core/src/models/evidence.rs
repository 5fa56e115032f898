use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Authority class of a retrieved knowledge item.
///
/// Unknown source strings deserialize to [`SourceType::General`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum SourceType {
    Recall,
    Bulletin,
    Campaign,
    Manual,
    General,
    Community,
}

impl SourceType {
    /// Base authority priority. Lower is more authoritative.
    pub fn base_priority(self) -> u8 {
        match self {
            Self::Recall => 1,
            Self::Bulletin => 2,
            Self::Campaign => 3,
            Self::Manual => 4,
            Self::General => 5,
            Self::Community => 6,
        }
    }

    /// Case-insensitive parse; anything unrecognised is `General`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "recall" => Self::Recall,
            "bulletin" | "tsb" => Self::Bulletin,
            "campaign" => Self::Campaign,
            "manual" => Self::Manual,
            "community" => Self::Community,
            _ => Self::General,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Recall => "recall",
            Self::Bulletin => "bulletin",
            Self::Campaign => "campaign",
            Self::Manual => "manual",
            Self::General => "general",
            Self::Community => "community",
        }
    }
}

impl From<String> for SourceType {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A knowledge item returned by external retrieval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceItem {
    pub content: String,
    pub source_type: SourceType,
    #[serde(default)]
    pub effective_date: Option<NaiveDate>,
    #[serde(default)]
    pub relevance_score: f64,
    #[serde(default)]
    pub title: Option<String>,
}

impl EvidenceItem {
    pub fn new(content: impl Into<String>, source_type: SourceType) -> Self {
        Self {
            content: content.into(),
            source_type,
            effective_date: None,
            relevance_score: 0.0,
            title: None,
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.effective_date = Some(date);
        self
    }

    pub fn with_relevance(mut self, score: f64) -> Self {
        self.relevance_score = score;
        self
    }
}
