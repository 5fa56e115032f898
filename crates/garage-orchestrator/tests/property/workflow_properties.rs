#[path = "../common/mod.rs"]
mod common;

use garage_core::models::*;
use garage_orchestrator::{gate, transition, ChatRequest, GateInput, WorkflowState};
use garage_taxonomy::TaxonomyRegistry;
use proptest::prelude::*;

use common::{harness, inline_config, keywords};

const PATHS: &[(&str, &str, &str)] = &[
    ("BRAKES", "PADS_ROTORS", "SQUEALING"),
    ("ELECTRICAL", "BATTERY", "DEAD_CELL"),
    ("HVAC", "COMPRESSOR", "LEAK"),
    ("FOO", "BAR", "BAZ"),
    ("brakes", "abs", "warning_light"),
];

fn arb_proposal() -> impl Strategy<Value = RawProposal> {
    (0..PATHS.len(), -0.5f64..1.5).prop_map(|(i, confidence)| {
        let (s, c, f) = PATHS[i];
        RawProposal::new(s, c, f, confidence)
    })
}

fn arb_batch() -> impl Strategy<Value = ProposalBatch> {
    (prop::collection::vec(arb_proposal(), 0..4), prop::bool::weighted(0.1)).prop_map(
        |(proposals, out_of_scope)| ProposalBatch {
            proposals,
            out_of_scope,
        },
    )
}

fn arb_history() -> impl Strategy<Value = Vec<HistoricalMatch>> {
    prop::collection::vec(
        (0..PATHS.len(), 0.0f64..=1.0).prop_map(|(i, score)| {
            let (s, c, f) = PATHS[i];
            HistoricalMatch {
                id: format!("T-{i}"),
                complaint: "past case".into(),
                system: s.into(),
                component: c.into(),
                failure_mode: f.into(),
                resolution: String::new(),
                score,
            }
        }),
        0..3,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn workflow_is_bounded_and_emits_only_valid_paths(
        passes in prop::collection::vec(arb_batch(), 1..4),
        history in arb_history(),
        turns in 1usize..4,
    ) {
        let registry = TaxonomyRegistry::builtin();
        let h = harness(keywords(&["brakes", "noise"]), history, Vec::new(), passes, inline_config());

        let mut session_id: Option<String> = None;
        for turn in 0..turns {
            let calls_before = h.proposer.calls();
            let mut request = ChatRequest::new(format!("brake noise on turn {turn}"));
            if let Some(id) = &session_id {
                request = request.in_session(id.clone());
            }
            let response = h.orchestrator.process_message(request);
            session_id = Some(response.session_id.clone());

            prop_assert!(response.loop_count <= 1);
            prop_assert!(h.proposer.calls() - calls_before <= 2);
            prop_assert_ne!(response.outcome.status(), ClassificationStatus::SystemError);

            if let Some(intent) = response.outcome.intent() {
                prop_assert!(registry.validate_path(&intent.system, &intent.component, &intent.failure_mode));
                prop_assert!((0.0..=1.0).contains(&intent.confidence.value()));
            }
        }
    }

    #[test]
    fn gate_never_refines_at_the_cap(
        top in prop::option::of(0.0f64..=1.0),
        loop_count in 1u32..5,
        out_of_scope in any::<bool>(),
    ) {
        let input = GateInput::new(top, loop_count, out_of_scope);
        prop_assert_eq!(gate(&input), WorkflowState::Respond);
    }

    #[test]
    fn every_walk_reaches_respond_within_two_passes(
        confidences in prop::collection::vec(prop::option::of(0.0f64..=1.0), 2),
        out_of_scope in any::<bool>(),
    ) {
        let mut state = WorkflowState::INITIAL;
        let mut loop_count = 0u32;
        let mut passes = 0usize;
        let mut steps = 0;
        while let Some(next) = transition(
            state,
            &GateInput::new(confidences[passes.saturating_sub(1).min(1)], loop_count, out_of_scope),
        ) {
            if next == WorkflowState::Diagnosis {
                passes += 1;
            }
            if next == WorkflowState::Refine {
                loop_count += 1;
            }
            state = next;
            steps += 1;
            prop_assert!(steps < 16);
        }
        prop_assert!(passes <= 2);
        prop_assert!(loop_count <= 1);
    }
}
