//! Numbers -> short SI-prefixed strings

use crate::notation::engine::Engine;
use crate::notation::error::{NotationError, Result};
use crate::notation::table::pow10;

pub const DEFAULT_DIGITS: usize = 3;

impl Engine {
    /// Format `value` (in the base unit) with the best fitting display prefix.
    ///
    /// For units the domain's power rule applies to, the prefix is picked
    /// per dimension: 2.5e-6 m² is "2.50 mm²".
    ///
    /// ```
    /// use engnotation::notation::Engine;
    /// assert_eq!(Engine::generic().format(0.0000015, "V", 3).unwrap(), "1.50 µV");
    /// ```
    pub fn format(&self, value: f64, unit: &str, digits: usize) -> Result<String> {
        if value.is_nan() {
            return Ok(format_scaled(value, unit, digits));
        }
        if value.is_infinite() {
            return Err(NotationError::OutOfRange(value));
        }

        let step = 3 * self.table.power().power_for(unit);
        let mut tier = if value == 0.0 {
            0
        } else {
            (value.abs().log10() / f64::from(step)).floor() as i32
        };
        // log10 may be off by one ulp around exact powers of ten
        if value != 0.0 {
            let scaled = value.abs() / pow10(step * tier);
            if scaled >= pow10(step) {
                tier += 1;
            } else if scaled < 1.0 {
                tier -= 1;
            }
        }
        let (min, max) = self.table.tier_range();
        if tier < min || tier > max {
            return Err(NotationError::OutOfRange(value));
        }
        let prefix = self
            .table
            .display_prefix(tier)
            .ok_or(NotationError::OutOfRange(value))?;

        let scaled = value / pow10(step * tier);
        Ok(format_scaled(scaled, &format!("{}{}", prefix, unit), digits))
    }

    /// One display prefix for a whole series of values.
    ///
    /// Returns the multiplier to apply to every value and the prefix to show.
    /// The tier is the rounded mean of the log10 magnitudes, zeros count as
    /// magnitude 1 and NaNs are ignored.
    pub fn auto_prefix(&self, values: &[f64]) -> (f64, String) {
        self.auto_prefix_for(values, "")
    }

    /// Like [`Engine::auto_prefix`] for values shown in `unit`, honoring the
    /// domain's power rule
    pub fn auto_prefix_for(&self, values: &[f64], unit: &str) -> (f64, String) {
        let logs: Vec<f64> = values
            .iter()
            .filter(|v| !v.is_nan())
            .map(|v| {
                let log = v.abs().log10();
                if log.is_infinite() {
                    0.0
                } else {
                    log
                }
            })
            .collect();
        let mean = if logs.is_empty() {
            0.0
        } else {
            logs.iter().sum::<f64>() / logs.len() as f64
        };

        let step = 3 * self.table.power().power_for(unit);
        let (min, max) = self.table.tier_range();
        let tier = ((mean / f64::from(step)).round() as i32).clamp(min, max);
        let prefix = self.table.display_prefix(tier).unwrap_or_default();
        (pow10(-step * tier), prefix.to_string())
    }
}

/// Format an already scaled value and append `suffix` (prefix + unit).
///
/// `digits` significant digits for values below 100, rounded integers above.
/// NaN is shown as "-".
pub fn format_scaled(value: f64, suffix: &str, digits: usize) -> String {
    let abs = value.abs();
    let number = if value.is_nan() {
        "-".to_string()
    } else if abs < 1.0 {
        format!("{:.*}", digits, value)
    } else if abs < 10.0 {
        format!("{:.*}", digits.saturating_sub(1), value)
    } else if abs < 100.0 {
        format!("{:.*}", digits.saturating_sub(2), value)
    } else {
        format!("{:.0}", value)
    };

    if suffix.is_empty() {
        number
    } else {
        format!("{} {}", number, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::config::{EngineConfig, PowerRule, UnitEntry};

    #[test]
    fn test_format_scaled() {
        assert_eq!(format_scaled(1.01, "A", 3), "1.01 A");
        assert_eq!(format_scaled(1.0, "A", 3), "1.00 A");
        assert_eq!(format_scaled(101.0, "A", 3), "101 A");
        assert_eq!(format_scaled(99.9, "A", 3), "99.9 A");
        assert_eq!(format_scaled(1000.0, "", 3), "1000");
        assert_eq!(format_scaled(1.01, "A", 4), "1.010 A");
        assert_eq!(format_scaled(0.5, "", 3), "0.500");
        assert_eq!(format_scaled(f64::NAN, "V", 3), "- V");
        assert_eq!(format_scaled(f64::NAN, "", 3), "-");
    }

    #[test]
    fn test_format_scaled_few_digits() {
        assert_eq!(format_scaled(12.345, "V", 1), "12 V");
        assert_eq!(format_scaled(5.5, "V", 0), "6 V");
    }

    #[test]
    fn test_auto_prefix() {
        let engine = Engine::generic();
        let base: Vec<f64> = (0..18).map(|i| -4.0 + 0.5 * i as f64).collect();

        assert_eq!(engine.auto_prefix(&base), (1.0, String::new()));

        let milli: Vec<f64> = base.iter().map(|v| v * 1e-3).collect();
        let (multiplier, prefix) = engine.auto_prefix(&milli);
        assert_eq!(prefix, "m");
        assert!((multiplier - 1e3).abs() < 1e-9);

        let giga: Vec<f64> = base.iter().map(|v| v * 1e9).collect();
        assert_eq!(engine.auto_prefix(&giga).1, "G");

        let kilo: Vec<f64> = (0..200).map(|i| 1000.0 + 5.0 * i as f64).collect();
        assert_eq!(engine.auto_prefix(&kilo).1, "k");
    }

    #[test]
    fn test_auto_prefix_clamps_to_table() {
        let engine = Engine::generic();
        let tiny: Vec<f64> = [1.0, 2.0, 3.0].iter().map(|v| v * 1e-40).collect();
        assert_eq!(engine.auto_prefix(&tiny).1, "y");
        let huge: Vec<f64> = [1.0, 2.0, 3.0].iter().map(|v| v * 1e40).collect();
        assert_eq!(engine.auto_prefix(&huge).1, "Y");
        assert_eq!(engine.auto_prefix(&[]), (1.0, String::new()));
    }

    #[test]
    fn test_format_tier_boundaries() {
        let engine = Engine::generic();
        assert_eq!(engine.format(1000.0, "Ω", 3).unwrap(), "1.00 kΩ");
        assert_eq!(engine.format(999.0, "Ω", 3).unwrap(), "999 Ω");
        // stays below the next tier instead of showing "1.000 kΩ"
        assert_eq!(engine.format(999.9999999999, "Ω", 3).unwrap(), "1000 Ω");
    }

    #[test]
    fn test_format_squared_units() {
        let engine = Engine::new(
            EngineConfig::new("area", vec![UnitEntry::new("m²"), UnitEntry::new("b")])
                .with_power(PowerRule::Square),
        )
        .unwrap();
        assert_eq!(engine.format(2.5e-6, "m²", 3).unwrap(), "2.50 mm²");
        assert_eq!(engine.format(1e-6, "m²", 3).unwrap(), "1.00 mm²");
        // no square marker, the prefix applies once
        assert_eq!(engine.format(2.5e-6, "b", 3).unwrap(), "2.50 µb");

        let (multiplier, prefix) = engine.auto_prefix_for(&[1e6, 2e6, 3e6], "m²");
        assert_eq!(prefix, "k");
        assert!((multiplier - 1e-6).abs() < 1e-18);
    }
}
