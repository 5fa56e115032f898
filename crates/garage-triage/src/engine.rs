use tracing::debug;

use garage_core::models::{Severity, TaxonomyPath, Triage, VehicleState};

/// Failure modes that leave the vehicle unable to move.
const CRITICAL_MODES: &[&str] = &["NO_START", "NO_CRANK", "DEAD_CELL"];

const HIGH_SEVERITY_MODES: &[&str] = &["OVERHEATING", "FLUID_LEAK", "SPONGY_PEDAL", "WARNING_LIGHT"];

const HIGH_SEVERITY_SYSTEMS: &[&str] = &["BRAKES"];

pub const FALLBACK_ACTION: &str = "Perform visual inspection and diagnostic scan";

const ACTIONS: &[((&str, &str), &str)] = &[
    (("ELECTRICAL", "STARTER_MOTOR"), "Check battery voltage → inspect starter relay → test starter motor"),
    (("ELECTRICAL", "BATTERY"), "Test battery voltage → inspect terminals → check charging system"),
    (("ELECTRICAL", "ALTERNATOR"), "Test alternator output → check belt tension → inspect connections"),
    (("POWERTRAIN", "ENGINE"), "Check fuel system → inspect ignition → test compression"),
    (("POWERTRAIN", "TRANSMISSION"), "Check transmission fluid → inspect linkage → scan DTCs"),
    (("HVAC", "COMPRESSOR"), "Check refrigerant level → inspect compressor clutch → verify pressures"),
    (("HVAC", "BLOWER_MOTOR"), "Check fuse → test blower resistor → inspect motor"),
    (("HVAC", "HEATER_CORE"), "Check coolant level → inspect heater hoses → test thermostat"),
    (("BRAKES", "PADS_ROTORS"), "Inspect pad thickness → check rotor condition → verify caliper operation"),
    (("BRAKES", "BRAKE_FLUID"), "Check fluid level → inspect for leaks → bleed system"),
    (("BRAKES", "ABS"), "Scan ABS codes → check wheel sensors → inspect module"),
    (("SUSPENSION", "SHOCKS_STRUTS"), "Visual inspection → bounce test → check for leaks"),
    (("SUSPENSION", "BALL_JOINTS"), "Check for play → inspect boots → test under load"),
    (("SUSPENSION", "CONTROL_ARMS"), "Inspect bushings → check for play → verify alignment"),
    (("STEERING", "POWER_STEERING"), "Check fluid level → inspect pump → look for leaks"),
    (("STEERING", "STEERING_RACK"), "Check for play → inspect boots → verify tie rod ends"),
    (("STEERING", "TIE_RODS"), "Check for play → inspect boots → verify alignment"),
    (("EXHAUST", "CATALYTIC_CONVERTER"), "Scan DTCs → check O2 sensors → inspect for damage"),
    (("EXHAUST", "MUFFLER"), "Visual inspection → check hangers → look for rust/holes"),
    (("EXHAUST", "EXHAUST_MANIFOLD"), "Visual inspection → check for cracks → verify gaskets"),
    (("TIRES_WHEELS", "TIRES"), "Inspect tire → check pressure → locate damage → repair or replace"),
    (("TIRES_WHEELS", "WHEELS"), "Inspect rim → check for bends/cracks → verify lug torque"),
    (("TIRES_WHEELS", "TPMS"), "Scan TPMS sensors → check battery → verify calibration"),
];

/// Stateless triage rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct TriageEngine;

impl TriageEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn assess(&self, path: &TaxonomyPath) -> Triage {
        let triage = Triage {
            severity: self.severity(path),
            vehicle_state: self.vehicle_state(path),
            suggested_action: self.suggested_action(path).to_string(),
        };
        debug!(
            path = %path,
            severity = ?triage.severity,
            vehicle_state = ?triage.vehicle_state,
            "triage assessed"
        );
        triage
    }

    /// Critical mode, then brakes or a high-severity mode. Everything else is medium.
    pub fn severity(&self, path: &TaxonomyPath) -> Severity {
        if is_critical(path) {
            Severity::Critical
        } else if is_high(path) {
            Severity::High
        } else {
            // HVAC, EXHAUST and SUSPENSION are medium, and so is everything else.
            Severity::Medium
        }
    }

    pub fn vehicle_state(&self, path: &TaxonomyPath) -> VehicleState {
        if is_critical(path) {
            VehicleState::Immobilized
        } else if is_high(path) {
            VehicleState::DrivableWithCaution
        } else {
            VehicleState::Normal
        }
    }

    pub fn suggested_action(&self, path: &TaxonomyPath) -> &'static str {
        ACTIONS
            .iter()
            .find(|((s, c), _)| *s == path.system && *c == path.component)
            .map(|(_, action)| *action)
            .unwrap_or(FALLBACK_ACTION)
    }
}

fn is_critical(path: &TaxonomyPath) -> bool {
    CRITICAL_MODES.contains(&path.failure_mode.as_str())
}

fn is_high(path: &TaxonomyPath) -> bool {
    HIGH_SEVERITY_SYSTEMS.contains(&path.system.as_str())
        || HIGH_SEVERITY_MODES.contains(&path.failure_mode.as_str())
}
