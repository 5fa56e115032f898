use serde::{Deserialize, Serialize};

/// What a VIN or registration number says about the customer's vehicle.
/// A registration fills in `vin` only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleInfo {
    /// The identifier as decoded: a 17-character VIN or a registration number.
    pub vin: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<String>,
    /// Registering state, for registration numbers with a known state code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl VehicleInfo {
    pub fn new(vin: impl Into<String>) -> Self {
        Self {
            vin: vin.into(),
            ..Self::default()
        }
    }

    /// Retrieval filter tags: `make:`, `model:`, `engine:`, `fuel:` (lower-cased)
    /// followed by a `gen:` bucket when the model year is known.
    pub fn filter_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = [
            ("make", &self.make),
            ("model", &self.model),
            ("engine", &self.engine),
            ("fuel", &self.fuel_type),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_ref().map(|v| format!("{key}:{}", v.to_lowercase())))
        .collect();

        if let Some(year) = self.year {
            let generation = match year {
                y if y >= 2020 => "current",
                y if y >= 2015 => "previous",
                _ => "legacy",
            };
            tags.push(format!("gen:{generation}"));
        }
        tags
    }
}
