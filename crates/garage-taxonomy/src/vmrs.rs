//! Vehicle Maintenance Reporting Standards (VMRS) code mapping.
//!
//! Codes have the form `SSS-AAA-FFF`: system, assembly, failure suffix.

use serde::Serialize;

use garage_core::models::TaxonomyPath;

const SYSTEM_CODES: &[(&str, &str)] = &[
    ("BRAKES", "013"),
    ("ELECTRICAL", "034"),
    ("POWERTRAIN", "045"),
    ("HVAC", "083"),
    ("SUSPENSION", "014"),
    ("STEERING", "015"),
    ("EXHAUST", "043"),
    ("TIRES_WHEELS", "017"),
    ("FUEL", "044"),
    ("COOLING", "042"),
];

const ASSEMBLY_CODES: &[((&str, &str), &str)] = &[
    (("BRAKES", "PADS_ROTORS"), "013-001"),
    (("BRAKES", "BRAKE_FLUID"), "013-002"),
    (("BRAKES", "CALIPERS"), "013-003"),
    (("BRAKES", "ABS"), "013-004"),
    (("BRAKES", "BRAKE_LINES"), "013-005"),
    (("ELECTRICAL", "BATTERY"), "034-001"),
    (("ELECTRICAL", "ALTERNATOR"), "034-002"),
    (("ELECTRICAL", "STARTER_MOTOR"), "034-003"),
    (("ELECTRICAL", "WIRING"), "034-004"),
    (("ELECTRICAL", "FUSES"), "034-005"),
    (("POWERTRAIN", "ENGINE"), "045-001"),
    (("POWERTRAIN", "TRANSMISSION"), "045-002"),
    (("POWERTRAIN", "CLUTCH"), "045-003"),
    (("POWERTRAIN", "DRIVESHAFT"), "045-004"),
    (("HVAC", "COMPRESSOR"), "083-001"),
    (("HVAC", "CONDENSER"), "083-002"),
    (("HVAC", "EVAPORATOR"), "083-003"),
    (("HVAC", "BLOWER_MOTOR"), "083-004"),
    (("HVAC", "HEATER_CORE"), "083-005"),
    (("SUSPENSION", "SHOCKS_STRUTS"), "014-001"),
    (("SUSPENSION", "BALL_JOINTS"), "014-002"),
    (("SUSPENSION", "CONTROL_ARMS"), "014-003"),
    (("SUSPENSION", "SPRINGS"), "014-004"),
    (("STEERING", "POWER_STEERING"), "015-001"),
    (("STEERING", "STEERING_RACK"), "015-002"),
    (("STEERING", "TIE_RODS"), "015-003"),
    (("STEERING", "STEERING_COLUMN"), "015-004"),
    (("EXHAUST", "CATALYTIC_CONVERTER"), "043-001"),
    (("EXHAUST", "MUFFLER"), "043-002"),
    (("EXHAUST", "EXHAUST_MANIFOLD"), "043-003"),
    (("EXHAUST", "O2_SENSORS"), "043-004"),
    (("TIRES_WHEELS", "TIRES"), "017-001"),
    (("TIRES_WHEELS", "WHEELS"), "017-002"),
    (("TIRES_WHEELS", "TPMS"), "017-003"),
];

const FAILURE_SUFFIXES: &[(&str, &str)] = &[
    ("SQUEALING", "001"),
    ("GRINDING", "002"),
    ("VIBRATION", "003"),
    ("NOISE", "004"),
    ("LEAK", "005"),
    ("NO_START", "006"),
    ("OVERHEATING", "007"),
    ("WARNING_LIGHT", "008"),
    ("DEAD_CELL", "009"),
    ("CORROSION", "010"),
    ("NOT_CHARGING", "011"),
    ("ROUGH_IDLE", "012"),
    ("MISFIRING", "013"),
    ("STALLING", "014"),
    ("HARD_SHIFT", "015"),
    ("SLIPPING", "016"),
    ("CLUTCH_FAILURE", "017"),
    ("NO_AIRFLOW", "018"),
    ("NO_HEAT", "019"),
    ("BOUNCY_RIDE", "020"),
    ("CLUNKING", "021"),
    ("WANDERING", "022"),
    ("PUNCTURE", "023"),
    ("FLAT", "024"),
];

const UNKNOWN_ASSEMBLY: &str = "000";
const UNKNOWN_FAILURE: &str = "099";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VmrsCode {
    pub code: String,
    pub description: String,
    pub system_name: String,
}

/// Stateless lookup from taxonomy paths to VMRS codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct VmrsMapper;

impl VmrsMapper {
    pub fn new() -> Self {
        Self
    }

    /// `None` when the system has no VMRS system code (e.g. `CNG_LPG`).
    pub fn code_for(&self, path: &TaxonomyPath) -> Option<VmrsCode> {
        let system_code = lookup(SYSTEM_CODES, path.system.as_str())?;

        let assembly = ASSEMBLY_CODES
            .iter()
            .find(|((s, c), _)| *s == path.system && *c == path.component)
            .map(|(_, code)| (*code).to_string())
            .unwrap_or_else(|| format!("{system_code}-{UNKNOWN_ASSEMBLY}"));

        let suffix = lookup(FAILURE_SUFFIXES, path.failure_mode.as_str()).unwrap_or(UNKNOWN_FAILURE);

        Some(VmrsCode {
            code: format!("{assembly}-{suffix}"),
            description: format!("{} {} {}", path.system, path.component, path.failure_mode),
            system_name: path.system.clone(),
        })
    }

    pub fn system_codes(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        SYSTEM_CODES.iter().copied()
    }
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}
