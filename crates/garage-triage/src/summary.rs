//! One-line technical summaries for work orders.

use garage_core::models::TaxonomyPath;

pub const OUT_OF_SCOPE_SUMMARY: &str = "Query is outside automotive service domain";
pub const UNDETERMINED_SUMMARY: &str = "Unable to determine technical summary";

const SUMMARIES: &[(&str, &str)] = &[
    ("NO_START", "No-start condition reported"),
    ("NO_CRANK", "Engine fails to crank"),
    ("SOLENOID_CLICK", "Audible starter solenoid activation without engine engagement"),
    ("ROUGH_IDLE", "Engine running rough at idle"),
    ("OVERHEATING", "Engine overheating condition"),
    ("OIL_LEAK", "Oil leak detected"),
    ("MISFIRING", "Engine misfiring detected"),
    ("STALLING", "Engine stalling condition"),
    ("HARD_SHIFT", "Harsh gear transitions"),
    ("SLIPPING", "Transmission slippage during acceleration"),
    ("DELAYED_ENGAGEMENT", "Delayed response when shifting into gear"),
    ("LOW_VOLTAGE", "Battery voltage below normal operating range"),
    ("DEAD_CELL", "Battery cell failure detected"),
    ("CORROSION", "Battery terminal corrosion present"),
    ("NOT_CHARGING", "Charging system failure"),
    ("CLUTCH_FAILURE", "AC compressor clutch malfunction"),
    ("NOISY_OPERATION", "Abnormal noise from HVAC system"),
    ("LEAK", "Refrigerant or fluid leak detected"),
    ("NOT_ENGAGING", "Component not engaging properly"),
    ("NO_AIRFLOW", "No airflow from HVAC vents"),
    ("NOISE_VIBRATION", "Abnormal noise or vibration"),
    ("NO_HEAT", "Heater not producing heat"),
    ("SQUEALING", "Brake squeal during application"),
    ("GRINDING", "Metal-on-metal grinding noise"),
    ("VIBRATION_ON_BRAKE", "Vibration felt during brake application"),
    ("PULSATING_PEDAL", "Brake pedal pulsating during braking"),
    ("SPONGY_PEDAL", "Soft or spongy brake pedal"),
    ("BOUNCY_RIDE", "Excessive bounce or poor ride quality"),
    ("LEAKING", "Shock/strut leaking fluid"),
    ("CLUNKING_NOISE", "Clunking noise from suspension"),
    ("CLUNKING", "Clunking noise detected"),
    ("WANDERING", "Vehicle wanders or drifts"),
    ("WHINING_NOISE", "Whining noise from power steering"),
    ("STIFF_STEERING", "High steering effort required"),
    ("JERKY_MOVEMENT", "Jerky steering response"),
    ("LOOSE_STEERING", "Excessive play in steering"),
    ("ROTTEN_EGG_SMELL", "Sulfur smell indicating catalytic converter issue"),
    ("REDUCED_POWER", "Reduced engine power"),
    ("RATTLING", "Rattling noise from exhaust"),
    ("LOUD_EXHAUST", "Loud exhaust noise"),
    ("TICKING_NOISE", "Ticking noise from exhaust manifold"),
    ("EXHAUST_SMELL", "Exhaust fumes detected in cabin"),
    ("PUNCTURE", "Tire puncture detected"),
    ("FLAT", "Flat tire condition"),
    ("LOW_PRESSURE", "Low tire pressure"),
    ("WORN_TREAD", "Tire tread wear detected"),
    ("BENT_RIM", "Wheel rim damage detected"),
];

/// Summary keyed by failure mode, falling back to `"{system} {component} issue reported"`.
pub fn technical_summary(path: &TaxonomyPath) -> String {
    SUMMARIES
        .iter()
        .find(|(mode, _)| *mode == path.failure_mode)
        .map(|(_, summary)| (*summary).to_string())
        .unwrap_or_else(|| format!("{} {} issue reported", path.system, path.component))
}
