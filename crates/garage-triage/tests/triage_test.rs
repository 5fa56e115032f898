use garage_core::models::{Severity, TaxonomyPath, VehicleState};
use garage_triage::engine::FALLBACK_ACTION;
use garage_triage::{technical_summary, TriageEngine};

fn path(s: &str, c: &str, f: &str) -> TaxonomyPath {
    TaxonomyPath::new(s, c, f)
}

// ── Severity and vehicle state ──

#[test]
fn brake_squeal_is_high_and_drivable_with_caution() {
    let triage = TriageEngine::new().assess(&path("BRAKES", "PADS_ROTORS", "SQUEALING"));
    assert_eq!(triage.severity, Severity::High);
    assert_eq!(triage.vehicle_state, VehicleState::DrivableWithCaution);
    assert_eq!(
        triage.suggested_action,
        "Inspect pad thickness → check rotor condition → verify caliper operation"
    );
}

#[test]
fn dead_cell_is_critical_and_immobilized() {
    let triage = TriageEngine::new().assess(&path("ELECTRICAL", "BATTERY", "DEAD_CELL"));
    assert_eq!(triage.severity, Severity::Critical);
    assert_eq!(triage.vehicle_state, VehicleState::Immobilized);
}

#[test]
fn high_mode_outside_brakes_is_high() {
    let engine = TriageEngine::new();
    let overheating = path("POWERTRAIN", "ENGINE", "OVERHEATING");
    assert_eq!(engine.severity(&overheating), Severity::High);
    assert_eq!(engine.vehicle_state(&overheating), VehicleState::DrivableWithCaution);
}

#[test]
fn everything_else_is_medium_and_normal() {
    let engine = TriageEngine::new();
    for p in [
        path("HVAC", "COMPRESSOR", "LEAK"),
        path("SUSPENSION", "BALL_JOINTS", "CLUNKING"),
        path("TWO_WHEELER", "CARBURETOR", "MILEAGE_DROP"),
    ] {
        assert_eq!(engine.severity(&p), Severity::Medium);
        assert_eq!(engine.vehicle_state(&p), VehicleState::Normal);
    }
}

#[test]
fn unmapped_component_gets_fallback_action() {
    let triage = TriageEngine::new().assess(&path("CNG_LPG", "CNG_KIT", "LEAK"));
    assert_eq!(triage.suggested_action, FALLBACK_ACTION);
}

#[test]
fn triage_serializes_screaming_case() {
    let triage = TriageEngine::new().assess(&path("ELECTRICAL", "STARTER_MOTOR", "NO_CRANK"));
    let json = serde_json::to_value(&triage).unwrap();
    assert_eq!(json["severity"], "CRITICAL");
    assert_eq!(json["vehicle_state"], "IMMOBILIZED");
}

// ── Technical summary ──

#[test]
fn summary_by_failure_mode_with_fallback() {
    assert_eq!(
        technical_summary(&path("BRAKES", "PADS_ROTORS", "SQUEALING")),
        "Brake squeal during application"
    );
    assert_eq!(
        technical_summary(&path("CNG_LPG", "GAS_SENSOR", "FALSE_ALARM")),
        "CNG_LPG GAS_SENSOR issue reported"
    );
}
