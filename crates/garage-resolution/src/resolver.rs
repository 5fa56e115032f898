//! AmbiguityResolver: the decisive-or-clarify rule.

use serde::Serialize;
use tracing::debug;

use garage_core::config::ResolutionConfig;
use garage_taxonomy::DiagnosisCandidate;

use crate::templates;

/// Tolerance on the top-two delta so that e.g. 0.70 vs 0.60 counts as a tie.
const DELTA_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Resolution {
    Confirmed,
    Ambiguous { follow_up_questions: Vec<String> },
}

impl Resolution {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed)
    }

    pub fn follow_up_questions(&self) -> &[String] {
        match self {
            Self::Confirmed => &[],
            Self::Ambiguous {
                follow_up_questions,
            } => follow_up_questions,
        }
    }
}

/// Stable descending sort by confidence. Ties keep proposal order.
pub fn rank_candidates(mut candidates: Vec<DiagnosisCandidate>) -> Vec<DiagnosisCandidate> {
    candidates.sort_by(|a, b| b.confidence().value().total_cmp(&a.confidence().value()));
    candidates
}

#[derive(Debug, Clone, Default)]
pub struct AmbiguityResolver {
    config: ResolutionConfig,
}

impl AmbiguityResolver {
    pub fn new(config: ResolutionConfig) -> Self {
        Self { config }
    }

    /// Resolve candidates that are already ranked (highest confidence first).
    pub fn resolve(&self, ranked: &[DiagnosisCandidate]) -> Resolution {
        let confidences: Vec<f64> = ranked.iter().map(|c| c.confidence().value()).collect();
        if !self.is_ambiguous(&confidences) {
            return Resolution::Confirmed;
        }
        let follow_up_questions = self.follow_up_questions(ranked);
        debug!(
            candidates = ranked.len(),
            questions = follow_up_questions.len(),
            "classification ambiguous"
        );
        Resolution::Ambiguous {
            follow_up_questions,
        }
    }

    /// Empty, low top confidence, or a near-tie between the top two.
    pub fn is_ambiguous(&self, ranked_confidences: &[f64]) -> bool {
        let Some(&top) = ranked_confidences.first() else {
            return true;
        };
        if top < self.config.confidence_threshold {
            return true;
        }
        match ranked_confidences.get(1) {
            Some(&second) => (top - second).abs() <= self.config.ambiguity_delta + DELTA_EPSILON,
            None => false,
        }
    }

    /// One question per distinct system among the top two, then general padding.
    pub fn follow_up_questions(&self, ranked: &[DiagnosisCandidate]) -> Vec<String> {
        let limit = self.config.follow_up_limit;
        let mut questions: Vec<String> = Vec::with_capacity(limit);
        let mut systems_seen: Vec<&str> = Vec::new();

        for candidate in ranked.iter().take(2) {
            if systems_seen.contains(&candidate.system()) {
                continue;
            }
            systems_seen.push(candidate.system());
            if let Some(first) = templates::questions_for(candidate.system()).first() {
                push_unique(&mut questions, first);
            }
        }

        for general in templates::GENERAL_QUESTIONS {
            if questions.len() >= limit {
                break;
            }
            push_unique(&mut questions, general);
        }

        questions.truncate(limit);
        questions
    }
}

fn push_unique(questions: &mut Vec<String>, question: &str) {
    if !questions.iter().any(|q| q == question) {
        questions.push(question.to_string());
    }
}
