//! Individual calibration factors, each in `[0, 1]`.

pub mod clarity;
pub mod historical;
pub mod keyword;
pub mod ontology;

/// Factor values fed into the weighted combination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationFactors {
    pub primary: f64,
    pub historical: f64,
    pub keyword: f64,
    pub ontology: f64,
    pub clarity: f64,
}
