use serde::Serialize;

/// Input split into the part before the unit and the unit itself
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UnitSplit {
    /// Everything before the unit, trailing markers and whitespace removed
    pub remainder: String,
    /// Markers directly in front of the unit (e.g. "°" in "3.2 °C")
    pub unit_marker: String,
    /// Canonical unit, empty if none was found
    pub unit: String,
}

/// Tokenized input, before any number is parsed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SplitToken {
    /// Leading markers (e.g. "±" in "±5%")
    pub marker: String,
    /// Mantissa, only `+-0123456789eE.`
    pub number: String,
    /// Magnitude prefix, empty if none
    pub prefix: String,
    pub unit_marker: String,
    pub unit: String,
}

impl SplitToken {
    pub fn new(
        marker: &str,
        number: &str,
        prefix: &str,
        unit_marker: &str,
        unit: &str,
    ) -> Self {
        Self {
            marker: marker.to_string(),
            number: number.to_string(),
            prefix: prefix.to_string(),
            unit_marker: unit_marker.to_string(),
            unit: unit.to_string(),
        }
    }
}

/// Outcome of normalizing one value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizeResult {
    pub marker: String,
    /// Value in the domain's base unit
    pub value: f64,
    /// Number as written, before any scaling
    pub original_number: f64,
    pub unit_marker: String,
    /// Canonical unit. Empty for plain numbers and for %, ppm and ppb
    pub unit: String,
    pub prefix: String,
    /// 10^exponent of the magnitude prefix, 1.0 without prefix
    pub prefix_multiplier: f64,
    /// Conversion factor of the unit to the base unit
    pub unit_factor: f64,
}

impl NormalizeResult {
    /// A plain number passes through unscaled
    pub fn from_number(value: f64) -> Self {
        Self {
            marker: String::new(),
            value,
            original_number: value,
            unit_marker: String::new(),
            unit: String::new(),
            prefix: String::new(),
            prefix_multiplier: 1.0,
            unit_factor: 1.0,
        }
    }
}
