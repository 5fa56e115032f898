//! VIN and Indian registration decoding.
//!
//! A 17-character VIN yields make (from the WMI), model year (position 10)
//! and, for a few makes, an engine guess from position 8. A registration
//! number yields only itself and the registering state.

use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, info};

use garage_core::models::VehicleInfo;

macro_rules! vehicle_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Identifiers in free text ───────────────────────────────────────────────
vehicle_pattern!(
    RE_VEHICLE_ID,
    r"(?i)\b(?:[A-HJ-NPR-Z0-9]{17}|[A-Z]{2}-?[0-9]{1,2}-?[A-Z]{1,3}-?[0-9]{1,4})\b"
);

// ── Compact forms (upper-case, no separators) ──────────────────────────────
vehicle_pattern!(RE_VIN, r"^[A-HJ-NPR-Z0-9]{17}$");
vehicle_pattern!(RE_REGISTRATION, r"^[A-Z]{2}[0-9]{1,2}[A-Z]{1,3}[0-9]{1,4}$");

const WMI_MAKES: &[(&str, &str)] = &[
    // India
    ("MA3", "Suzuki"),
    ("MA1", "Mahindra"),
    ("MAT", "Tata"),
    ("MBH", "Honda"),
    ("MAK", "Toyota"),
    ("MAL", "Hyundai"),
    ("MBJ", "Maruti Suzuki"),
    // Global
    ("1G1", "Chevrolet"),
    ("1HG", "Honda"),
    ("1FA", "Ford"),
    ("2HG", "Honda"),
    ("3VW", "Volkswagen"),
    ("5YJ", "Tesla"),
    ("JHM", "Honda"),
    ("JT2", "Toyota"),
    ("KM8", "Hyundai"),
    ("KNA", "Kia"),
    ("WAU", "Audi"),
    ("WBA", "BMW"),
    ("WDB", "Mercedes-Benz"),
    ("WF0", "Ford"),
    ("WVW", "Volkswagen"),
];

const REGISTRATION_STATES: &[(&str, &str)] = &[
    ("MH", "Maharashtra"),
    ("DL", "Delhi"),
    ("KA", "Karnataka"),
    ("TN", "Tamil Nadu"),
    ("UP", "Uttar Pradesh"),
    ("GJ", "Gujarat"),
    ("RJ", "Rajasthan"),
    ("WB", "West Bengal"),
    ("AP", "Andhra Pradesh"),
];

/// Model year from VIN position 10. The 30-year cycle is resolved to
/// 2001..=2030; I, O, Q, U, Z and 0 are never year codes.
fn model_year(code: char) -> Option<i32> {
    const LETTERS: &str = "ABCDEFGHJKLMNPRSTVWXY";
    match code {
        '1'..='9' => code.to_digit(10).map(|d| 2000 + d as i32),
        _ => LETTERS.find(code).map(|i| 2010 + i as i32),
    }
}

fn engine_guess(make: &str, code: char) -> Option<&'static str> {
    match (make, code) {
        ("Honda", '1') => Some("1.5L"),
        ("Honda", '2') => Some("2.0L"),
        ("Honda", '3') => Some("2.4L"),
        ("Toyota", 'A') => Some("2.0L"),
        ("Toyota", 'B') => Some("2.5L"),
        ("Toyota", 'C') => Some("3.0L"),
        ("Suzuki" | "Maruti Suzuki", 'K') => Some("1.2L K-Series"),
        ("Suzuki" | "Maruti Suzuki", 'D') => Some("1.3L Diesel"),
        _ => None,
    }
}

fn lookup(table: &[(&str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

fn matches(re: &LazyLock<Option<Regex>>, text: &str) -> bool {
    re.as_ref().is_some_and(|r| r.is_match(text))
}

/// Decode a VIN or registration number. Case, spaces and dashes are ignored.
/// Registration numbers are tried first.
pub fn decode_vehicle(raw: &str) -> Option<VehicleInfo> {
    let compact: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .flat_map(char::to_uppercase)
        .collect();

    if matches(&RE_REGISTRATION, &compact) {
        let region = lookup(REGISTRATION_STATES, &compact[..2]);
        info!(region = region.unwrap_or("unknown"), "decoded registration number");
        let mut vehicle = VehicleInfo::new(compact);
        vehicle.region = region.map(str::to_string);
        return Some(vehicle);
    }

    if matches(&RE_VIN, &compact) {
        return Some(decode_vin(compact));
    }

    debug!(len = compact.len(), "not a VIN or registration number");
    None
}

/// `vin` is 17 ASCII characters from the VIN alphabet.
fn decode_vin(vin: String) -> VehicleInfo {
    let chars: Vec<char> = vin.chars().collect();
    let make = lookup(WMI_MAKES, &vin[..3]);
    let year = model_year(chars[9]);
    let engine = make.and_then(|m| engine_guess(m, chars[7]));
    info!(make = make.unwrap_or("unknown"), year, "decoded VIN");

    let mut vehicle = VehicleInfo::new(vin);
    vehicle.make = make.map(str::to_string);
    vehicle.year = year;
    vehicle.engine = engine.map(str::to_string);
    vehicle
}

/// First identifier in `text` that decodes. Registration parts may be joined
/// by dashes but not spaces. A 17-character candidate must contain a digit,
/// so long words are not read as VINs.
pub fn find_vehicle(text: &str) -> Option<VehicleInfo> {
    let re = RE_VEHICLE_ID.as_ref()?;
    re.find_iter(text)
        .map(|m| m.as_str())
        .filter(|s| s.len() != 17 || s.bytes().any(|b| b.is_ascii_digit()))
        .find_map(decode_vehicle)
}
