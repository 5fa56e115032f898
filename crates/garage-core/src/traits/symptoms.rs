use crate::errors::StageResult;
use crate::models::SymptomExtraction;

/// Structured symptom extraction from free text.
pub trait ISymptomExtractor: Send + Sync {
    fn extract(&self, text: &str) -> StageResult<SymptomExtraction>;
}
