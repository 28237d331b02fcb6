//! A value paired with its unit, and unit-annotated results

use crate::notation::engine::{Engine, DEFAULT_ENGINE};
use crate::notation::error::{NotationError, Result};
use crate::notation::formatter::DEFAULT_DIGITS;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A value in the base unit of its engine's domain, e.g. 1.23e-3 "V".
///
/// Displays through the engine's formatter ("1.23 mV"). Quantities with
/// different units are never ordered against each other.
#[derive(Clone, Copy)]
pub struct Quantity<'e> {
    pub value: f64,
    pub unit: &'e str,
    engine: &'e Engine,
}

impl<'e> Quantity<'e> {
    pub fn new(value: f64, unit: &'e str) -> Self {
        Self::with_engine(&DEFAULT_ENGINE, value, unit)
    }

    pub fn with_engine(engine: &'e Engine, value: f64, unit: &'e str) -> Self {
        Self {
            value,
            unit,
            engine,
        }
    }

    pub fn engine(&self) -> &'e Engine {
        self.engine
    }

    pub fn abs(&self) -> Self {
        Self {
            value: self.value.abs(),
            ..*self
        }
    }

    /// Format with `digits` significant digits
    pub fn format(&self, digits: usize) -> Result<String> {
        self.engine.format(self.value, self.unit, digits)
    }

    /// Ordering that reports why two quantities can't be compared
    pub fn try_cmp(&self, other: &Quantity) -> Result<Option<Ordering>> {
        if self.unit != other.unit {
            return Err(NotationError::UnitMismatch {
                input: other.to_string(),
                expected: self.unit.to_string(),
                found: other.unit.to_string(),
            });
        }
        Ok(self.value.partial_cmp(&other.value))
    }
}

impl Engine {
    /// Parse `raw` into a [`Quantity`]. Input without a unit is rejected,
    /// since "1 m" in a domain without meters could be a prefix.
    pub fn quantity<'e>(&'e self, raw: &str) -> Result<Quantity<'e>> {
        let result = self.normalize_str(raw)?;
        if result.unit.is_empty() {
            return Err(NotationError::MissingUnit(raw.to_string()));
        }
        let unit = self
            .table
            .canonical_unit(&result.unit)
            .ok_or_else(|| NotationError::unknown_unit(self.domain(), result.unit.as_str()))?;
        Ok(Quantity::with_engine(self, result.value, unit))
    }

    /// Format the result of `calculation` in the unit it declares
    pub fn auto_format<T: ReturnsUnit>(&self, calculation: &T, digits: usize) -> Result<String> {
        self.format(calculation.evaluate(), T::UNIT, digits)
    }
}

impl FromStr for Quantity<'static> {
    type Err = NotationError;

    fn from_str(raw: &str) -> Result<Self> {
        DEFAULT_ENGINE.quantity(raw)
    }
}

impl fmt::Debug for Quantity<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quantity")
            .field("value", &self.value)
            .field("unit", &self.unit)
            .field("domain", &self.engine.domain())
            .finish()
    }
}

impl fmt::Display for Quantity<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format(DEFAULT_DIGITS) {
            Ok(text) => f.write_str(&text),
            // beyond the prefix table
            Err(_) => write!(f, "{} {}", self.value, self.unit),
        }
    }
}

impl PartialEq for Quantity<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.unit == other.unit && self.value == other.value
    }
}

impl PartialEq<f64> for Quantity<'_> {
    fn eq(&self, other: &f64) -> bool {
        self.value == *other
    }
}

impl PartialEq<&str> for Quantity<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

impl PartialOrd for Quantity<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok().flatten()
    }
}

impl PartialOrd<f64> for Quantity<'_> {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.value.partial_cmp(other)
    }
}

/// A calculation whose result is always in `UNIT`.
///
/// ```
/// use engnotation::notation::{Engine, ReturnsUnit};
///
/// struct OhmsLaw { volts: f64, amps: f64 }
///
/// impl ReturnsUnit for OhmsLaw {
///     const UNIT: &'static str = "Ω";
///     fn evaluate(&self) -> f64 {
///         self.volts / self.amps
///     }
/// }
///
/// let r = OhmsLaw { volts: 5.0, amps: 0.002 };
/// assert_eq!(Engine::generic().auto_format(&r, 3).unwrap(), "2.50 kΩ");
/// ```
pub trait ReturnsUnit {
    const UNIT: &'static str;

    fn evaluate(&self) -> f64;

    /// The result as a [`Quantity`] of the generic engine
    fn quantity(&self) -> Quantity<'static> {
        Quantity::new(self.evaluate(), Self::UNIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Reactance {
        farads: f64,
        hertz: f64,
    }

    impl ReturnsUnit for Reactance {
        const UNIT: &'static str = "Ω";

        fn evaluate(&self) -> f64 {
            1.0 / (2.0 * std::f64::consts::PI * self.hertz * self.farads)
        }
    }

    #[test]
    fn test_construct() {
        let q = Quantity::new(1.23, "V");
        assert_eq!(q.value, 1.23);
        assert_eq!(q.unit, "V");
        assert_eq!(q.to_string(), "1.23 V");
    }

    #[test]
    fn test_parse() {
        let q: Quantity = "1.23 mV".parse().unwrap();
        assert_eq!(q.value, 1.23e-3);
        assert_eq!(q.unit, "V");
        assert_eq!(q.to_string(), "1.23 mV");

        let q = Engine::generic().quantity("4.7 kohms").unwrap();
        assert_eq!(q.unit, "Ω");
        assert_eq!(q.value, 4700.0);
    }

    #[test]
    fn test_parse_requires_unit() {
        assert_eq!(
            "1.23 k".parse::<Quantity>().unwrap_err(),
            NotationError::MissingUnit("1.23 k".to_string())
        );
        // fractions are scaled away and leave no unit
        assert!(matches!(
            "5 %".parse::<Quantity>(),
            Err(NotationError::MissingUnit(_))
        ));
    }

    #[test]
    fn test_abs() {
        let q: Quantity = "-1.23 mV".parse().unwrap();
        assert_eq!(q.abs(), "1.23 mV".parse::<Quantity>().unwrap());
    }

    #[test]
    fn test_equality() {
        let q: Quantity = "1.23 mV".parse().unwrap();
        assert_eq!(q, q);
        assert_eq!(q, "1.23 mV".parse::<Quantity>().unwrap());
        assert_eq!(q, Quantity::new(1.23e-3, "V"));
        assert_eq!(q, 1.23e-3);
        assert_eq!(q, "1.23 mV");

        assert_ne!(q, "2.34 mV".parse::<Quantity>().unwrap());
        assert_ne!(q, Quantity::new(2.34e-3, "V"));
        assert_ne!(q, Quantity::new(1.23e-3, "A"));
        assert_ne!(q, 2.34e-3);
        assert_ne!(q, -1.23e-3);
        assert_ne!(q, "2.34 mV");
    }

    #[test]
    fn test_ordering() {
        let small = Quantity::new(1.0, "V");
        let large = Quantity::new(2.0, "V");
        assert!(small < large);
        assert!(large >= small);
        assert!(small < 1.5);
        assert_eq!(small.try_cmp(&large).unwrap(), Some(Ordering::Less));
    }

    #[test]
    fn test_different_units_do_not_compare() {
        let volts = Quantity::new(1.0, "V");
        let amps = Quantity::new(2.0, "A");
        assert_eq!(volts.partial_cmp(&amps), None);
        assert!(!(volts < amps) && !(volts > amps));
        match volts.try_cmp(&amps) {
            Err(NotationError::UnitMismatch {
                expected, found, ..
            }) => {
                assert_eq!(expected, "V");
                assert_eq!(found, "A");
            }
            other => panic!("Expected UnitMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_display_out_of_range() {
        assert_eq!(
            Quantity::new(1e30, "V").to_string(),
            "1000000000000000000000000000000 V"
        );
    }

    #[test]
    fn test_auto_format() {
        let xc = Reactance {
            farads: 100e-9,
            hertz: 1e3,
        };
        assert_eq!(Engine::generic().auto_format(&xc, 3).unwrap(), "1.59 kΩ");
        assert_eq!(xc.quantity().unit, "Ω");
        assert_eq!(xc.quantity().to_string(), "1.59 kΩ");
    }
}
