use std::sync::Arc;

use garage_core::models::RawProposal;
use garage_resolution::templates::GENERAL_QUESTIONS;
use garage_resolution::{rank_candidates, AmbiguityResolver, Resolution};
use garage_taxonomy::{DiagnosisCandidate, DiagnosisValidator, TaxonomyRegistry};
use proptest::prelude::*;

fn candidate(system: &str, component: &str, mode: &str, confidence: f64) -> DiagnosisCandidate {
    DiagnosisValidator::new(Arc::new(TaxonomyRegistry::builtin()))
        .validate(&RawProposal::new(system, component, mode, confidence))
        .unwrap()
}

fn brakes(c: f64) -> DiagnosisCandidate {
    candidate("BRAKES", "PADS_ROTORS", "SQUEALING", c)
}

fn battery(c: f64) -> DiagnosisCandidate {
    candidate("ELECTRICAL", "BATTERY", "DEAD_CELL", c)
}

// ── Decision rule ──

#[test]
fn threshold_alone_is_confirmed() {
    let resolver = AmbiguityResolver::default();
    assert_eq!(resolver.resolve(&[brakes(0.70)]), Resolution::Confirmed);
}

#[test]
fn below_threshold_is_ambiguous() {
    let resolver = AmbiguityResolver::default();
    assert!(!resolver.resolve(&[brakes(0.69)]).is_confirmed());
}

#[test]
fn close_runner_up_is_ambiguous() {
    let resolver = AmbiguityResolver::default();
    assert!(!resolver.resolve(&[brakes(0.70), battery(0.61)]).is_confirmed());
    assert!(!resolver.resolve(&[brakes(0.70), battery(0.60)]).is_confirmed());
    assert!(resolver.resolve(&[brakes(0.80), battery(0.60)]).is_confirmed());
}

#[test]
fn empty_is_ambiguous_with_general_questions() {
    let resolution = AmbiguityResolver::default().resolve(&[]);
    let expected: Vec<String> = GENERAL_QUESTIONS.iter().map(|q| q.to_string()).collect();
    assert_eq!(resolution.follow_up_questions(), expected.as_slice());
}

// ── Follow-ups ──

#[test]
fn one_question_per_distinct_system_then_padding() {
    let resolution = AmbiguityResolver::default().resolve(&[brakes(0.66), battery(0.62)]);
    assert_eq!(
        resolution.follow_up_questions(),
        [
            "Does the noise happen only when braking or always?".to_string(),
            "Does this happen consistently or intermittently?".to_string(),
            GENERAL_QUESTIONS[0].to_string(),
        ]
    );
}

#[test]
fn repeated_system_contributes_once() {
    let second = candidate("BRAKES", "ABS", "WARNING_LIGHT", 0.60);
    let resolution = AmbiguityResolver::default().resolve(&[brakes(0.65), second]);
    let questions = resolution.follow_up_questions();
    assert_eq!(questions.len(), 3);
    assert_eq!(questions[1], GENERAL_QUESTIONS[0]);
    assert_eq!(questions[2], GENERAL_QUESTIONS[1]);
}

#[test]
fn system_without_templates_uses_general_without_duplicates() {
    let cng = candidate("CNG_LPG", "CNG_KIT", "LEAK", 0.5);
    let resolution = AmbiguityResolver::default().resolve(&[cng]);
    let expected: Vec<String> = GENERAL_QUESTIONS.iter().map(|q| q.to_string()).collect();
    assert_eq!(resolution.follow_up_questions(), expected.as_slice());
}

// ── Ranking ──

#[test]
fn ranking_is_stable_descending() {
    let ranked = rank_candidates(vec![
        battery(0.5),
        brakes(0.9),
        candidate("HVAC", "COMPRESSOR", "LEAK", 0.5),
    ]);
    assert_eq!(ranked[0].system(), "BRAKES");
    assert_eq!(ranked[1].system(), "ELECTRICAL");
    assert_eq!(ranked[2].system(), "HVAC");
}

proptest! {
    #[test]
    fn ambiguous_always_yields_three_distinct_questions(
        confidences in proptest::collection::vec(0.0f64..1.0, 0..4)
    ) {
        let pool = [brakes(0.0), battery(0.0), candidate("TWO_WHEELER", "CARBURETOR", "MILEAGE_DROP", 0.0)];
        let candidates: Vec<DiagnosisCandidate> = confidences
            .iter()
            .enumerate()
            .map(|(i, c)| pool[i % pool.len()].clone().with_confidence((*c).into()))
            .collect();
        let ranked = rank_candidates(candidates);
        if let Resolution::Ambiguous { follow_up_questions } = AmbiguityResolver::default().resolve(&ranked) {
            prop_assert_eq!(follow_up_questions.len(), 3);
            let mut dedup = follow_up_questions.clone();
            dedup.sort();
            dedup.dedup();
            prop_assert_eq!(dedup.len(), 3);
        }
    }
}
